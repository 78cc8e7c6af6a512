use crate::stimulus::{CardStimulus, Dimension};
use serde::{Deserialize, Serialize};

/// One sorting trial: a target card above a fixed pair of choice cards.
///
/// Invariant: `correct_index` is 0 if `left` matches the target on the
/// active dimension, 1 if `right` does; exactly one of them does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortTrial {
    pub target: CardStimulus,
    pub left: CardStimulus,
    pub right: CardStimulus,
    pub correct_index: usize,
    /// `None` for fixed-list trials, whose phase supplies the rule
    pub dimension: Option<Dimension>,
}

impl SortTrial {
    pub fn choice(&self, index: usize) -> &CardStimulus {
        if index == 0 { &self.left } else { &self.right }
    }
}

/// Single-use response latch, one per presented trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseState {
    AwaitingResponse,
    Responded,
}

/// Outcome of one accepted response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortResult {
    pub selected_index: usize,
    pub correct: bool,
    pub reaction_time_ms: u64,
}

/// Row shape handed to the host's recording mechanism
#[derive(Debug, Clone, Serialize)]
pub struct TrialRecord {
    pub phase: &'static str,
    pub trial_id: usize,
    pub dimension: Dimension,
    pub result: SortResult,
}
