//! The closed card catalogue and the hand-authored trial orders.
//!
//! Four cards span the full {blue, red} x {rabbit, boat} space. The two
//! choice cards differ in both attributes, so any target from the pool
//! matches exactly one choice per dimension.

use crate::generator::build_trial;
use dccs_core::{CardColor, CardShape, CardStimulus, Dimension, SortTrial};

pub const BLUE_RABBIT: CardStimulus = CardStimulus {
    image: "img/blue_rabbit.png",
    name: "blue rabbit",
    shape: CardShape::Rabbit,
    color: CardColor::Blue,
};

pub const RED_BOAT: CardStimulus = CardStimulus {
    image: "img/red_boat.png",
    name: "red boat",
    shape: CardShape::Boat,
    color: CardColor::Red,
};

pub const RED_RABBIT: CardStimulus = CardStimulus {
    image: "img/red_rabbit.png",
    name: "red rabbit",
    shape: CardShape::Rabbit,
    color: CardColor::Red,
};

pub const BLUE_BOAT: CardStimulus = CardStimulus {
    image: "img/blue_boat.png",
    name: "blue boat",
    shape: CardShape::Boat,
    color: CardColor::Blue,
};

/// Base left/right order of the two choice cards
pub const CHOICE_PAIR: [CardStimulus; 2] = [BLUE_RABBIT, RED_BOAT];

/// Targets the mixed-block generator draws from
pub const TARGET_POOL: [CardStimulus; 4] = [RED_RABBIT, BLUE_BOAT, BLUE_RABBIT, RED_BOAT];

/// Fixed target order for the practice block
const PRACTICE_ORDER: [CardStimulus; 4] = [RED_RABBIT, BLUE_BOAT, BLUE_BOAT, RED_RABBIT];

/// Fixed target order for the single-dimension test blocks
const TEST_ORDER: [CardStimulus; 5] = [BLUE_BOAT, RED_RABBIT, RED_RABBIT, BLUE_BOAT, RED_RABBIT];

/// Color-sorting practice trials, choice pair in base order
pub fn practice_trials(count: usize) -> Vec<SortTrial> {
    fixed_trials(Dimension::Color, count, &PRACTICE_ORDER)
}

/// Single-dimension test trials for the given rule
pub fn test_trials(dimension: Dimension, count: usize) -> Vec<SortTrial> {
    fixed_trials(dimension, count, &TEST_ORDER)
}

/// Builds `count` trials from an authored target order, cycling it if the
/// requested count is longer. Fixed-list trials leave `dimension` unset;
/// the phase they run under supplies the rule.
fn fixed_trials(dimension: Dimension, count: usize, order: &[CardStimulus]) -> Vec<SortTrial> {
    order
        .iter()
        .cycle()
        .take(count)
        .map(|target| SortTrial {
            dimension: None,
            ..build_trial(dimension, *target, false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_posed(trial: &SortTrial, dimension: Dimension) {
        let left = trial.left.matches(&trial.target, dimension);
        let right = trial.right.matches(&trial.target, dimension);
        assert_ne!(left, right, "exactly one choice must match {:?}", trial.target);
        assert_eq!(trial.correct_index, if left { 0 } else { 1 });
    }

    #[test]
    fn practice_trials_are_well_posed_color_trials() {
        let trials = practice_trials(4);
        assert_eq!(trials.len(), 4);
        for trial in &trials {
            assert_eq!(trial.dimension, None);
            assert_well_posed(trial, Dimension::Color);
        }
    }

    #[test]
    fn test_trials_are_well_posed_on_both_rules() {
        for dimension in [Dimension::Color, Dimension::Shape] {
            for trial in test_trials(dimension, 5) {
                assert_well_posed(&trial, dimension);
            }
        }
    }

    #[test]
    fn fixed_lists_cycle_past_the_authored_order() {
        let trials = test_trials(Dimension::Shape, 12);
        assert_eq!(trials.len(), 12);
        assert_eq!(trials[0].target, trials[5].target);
        assert_eq!(trials[1].target, trials[6].target);
    }

    #[test]
    fn fixed_lists_keep_the_base_choice_order() {
        for trial in practice_trials(4) {
            assert_eq!(trial.left, CHOICE_PAIR[0]);
            assert_eq!(trial.right, CHOICE_PAIR[1]);
        }
    }

    #[test]
    fn every_pool_target_matches_exactly_one_choice_per_dimension() {
        for target in TARGET_POOL {
            for dimension in [Dimension::Color, Dimension::Shape] {
                let matches = CHOICE_PAIR
                    .iter()
                    .filter(|c| c.matches(&target, dimension))
                    .count();
                assert_eq!(matches, 1);
            }
        }
    }
}
