use serde::{Deserialize, Serialize};

/// The attribute a trial asks the participant to match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Color,
    Shape,
}

impl Dimension {
    /// Mixed-block rule: even trials sort by color, odd trials by shape
    pub fn for_trial_index(index: usize) -> Self {
        if index % 2 == 0 {
            Dimension::Color
        } else {
            Dimension::Shape
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Color => "color",
            Dimension::Shape => "shape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Blue,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardShape {
    Rabbit,
    Boat,
}

/// One card from the fixed catalogue: an image plus its two categorical
/// attributes. Cards are value types and freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardStimulus {
    pub image: &'static str,
    pub name: &'static str,
    pub shape: CardShape,
    pub color: CardColor,
}

impl CardStimulus {
    /// Equality on the active dimension only
    pub fn matches(&self, other: &CardStimulus, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Color => self.color == other.color,
            Dimension::Shape => self.shape == other.shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE_RABBIT: CardStimulus = CardStimulus {
        image: "img/blue_rabbit.png",
        name: "blue rabbit",
        shape: CardShape::Rabbit,
        color: CardColor::Blue,
    };
    const RED_RABBIT: CardStimulus = CardStimulus {
        image: "img/red_rabbit.png",
        name: "red rabbit",
        shape: CardShape::Rabbit,
        color: CardColor::Red,
    };

    #[test]
    fn matches_compares_only_the_active_dimension() {
        assert!(BLUE_RABBIT.matches(&RED_RABBIT, Dimension::Shape));
        assert!(!BLUE_RABBIT.matches(&RED_RABBIT, Dimension::Color));
    }

    #[test]
    fn dimension_alternates_by_parity() {
        assert_eq!(Dimension::for_trial_index(0), Dimension::Color);
        assert_eq!(Dimension::for_trial_index(1), Dimension::Shape);
        assert_eq!(Dimension::for_trial_index(2), Dimension::Color);
        assert_eq!(Dimension::for_trial_index(7), Dimension::Shape);
    }
}
