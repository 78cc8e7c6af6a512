use crate::stimulus::Dimension;

/// Defines task phases and behavior
pub trait Phase: Copy + Clone + PartialEq + Send + Sync + std::fmt::Debug + Default {
    fn label(&self) -> &'static str;
    fn next(&self) -> Option<Self>;

    /// The sorting rule this phase plays under, if it is the same for every
    /// trial. Mixed blocks return `None` and carry the rule per trial.
    fn fixed_dimension(&self) -> Option<Dimension>;

    fn is_practice(&self) -> bool {
        false
    }

    /// Practice shows feedback after each response; test blocks do not
    fn gives_feedback(&self) -> bool {
        self.is_practice()
    }
}

/// The standard DCCS block order
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum TaskPhase {
    ColorPractice,
    ColorTest,
    ShapeTest,
    Mixed,
}

impl Default for TaskPhase {
    fn default() -> Self {
        TaskPhase::ColorPractice
    }
}

impl Phase for TaskPhase {
    fn label(&self) -> &'static str {
        match self {
            TaskPhase::ColorPractice => "color-practice",
            TaskPhase::ColorTest => "color-test",
            TaskPhase::ShapeTest => "shape-test",
            TaskPhase::Mixed => "mixed",
        }
    }

    fn next(&self) -> Option<Self> {
        use TaskPhase::*;
        Some(match self {
            ColorPractice => ColorTest,
            ColorTest => ShapeTest,
            ShapeTest => Mixed,
            Mixed => return None,
        })
    }

    fn fixed_dimension(&self) -> Option<Dimension> {
        match self {
            TaskPhase::ColorPractice | TaskPhase::ColorTest => Some(Dimension::Color),
            TaskPhase::ShapeTest => Some(Dimension::Shape),
            TaskPhase::Mixed => None,
        }
    }

    fn is_practice(&self) -> bool {
        matches!(self, TaskPhase::ColorPractice)
    }
}
