pub mod catalogue;
pub mod config;
pub mod generator;
pub mod session;
pub mod summary;

pub use config::TaskConfig;
pub use generator::{build_trial, generate_mixed};
pub use session::{SessionEvent, TaskSession};
pub use summary::{summarize, PhaseSummary};
