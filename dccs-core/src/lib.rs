pub mod phase;
pub mod stimulus;
pub mod trial;

pub use phase::{Phase, TaskPhase};
pub use stimulus::{CardColor, CardShape, CardStimulus, Dimension};
pub use trial::{ResponseState, SortResult, SortTrial, TrialRecord};
