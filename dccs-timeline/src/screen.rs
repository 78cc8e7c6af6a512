use dccs_core::{SortTrial, TaskPhase};

/// What a screen puts in front of the participant
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent {
    /// Pre-rendered instruction markup
    Instruction { html: String },
    /// A sorting trial recorded under the given phase
    Trial { trial: SortTrial, phase: TaskPhase },
    /// Placeholder filled from the result log when reached
    Summary,
}

/// Which inputs the host should accept on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedResponses {
    /// Any advance gesture (click, key) moves on
    Advance,
    /// Only the two choice cards, indices 0 and 1
    Choice,
}

/// One entry of the ordered timeline handed to the host runner
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub content: ScreenContent,
    pub allowed: AllowedResponses,
    /// Spoken alongside the screen when narration is enabled
    pub narration: Option<String>,
}

impl Screen {
    pub fn instruction(html: String, narration: String) -> Self {
        Self {
            content: ScreenContent::Instruction { html },
            allowed: AllowedResponses::Advance,
            narration: Some(narration),
        }
    }

    pub fn trial(trial: SortTrial, phase: TaskPhase) -> Self {
        Self {
            content: ScreenContent::Trial { trial, phase },
            allowed: AllowedResponses::Choice,
            narration: None,
        }
    }

    pub fn summary() -> Self {
        Self {
            content: ScreenContent::Summary,
            allowed: AllowedResponses::Advance,
            narration: None,
        }
    }

    pub fn is_trial(&self) -> bool {
        matches!(self.content, ScreenContent::Trial { .. })
    }
}
