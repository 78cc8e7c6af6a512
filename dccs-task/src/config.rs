/// Run-level knobs, all defaulted. Passed into the session and the
/// timeline builder instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct TaskConfig {
    pub practice_trials: usize,
    /// Per single-dimension test block
    pub test_trials: usize,
    pub mixed_trials: usize,
    pub show_instructions: bool,
    pub show_summary: bool,
    /// Narrate instructions and feedback, set once per run
    pub audio_enabled: bool,
    pub feedback_ms: u64,
    /// Incorrect answers hold the feedback screen longer
    pub incorrect_feedback_ms: u64,
    /// How long a test trial waits before prompting a stalled participant
    pub reminder_delay_ms: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            practice_trials: 4,
            test_trials: 5,
            mixed_trials: 12,
            show_instructions: true,
            show_summary: true,
            audio_enabled: false,
            feedback_ms: 1500,
            incorrect_feedback_ms: 3000,
            reminder_delay_ms: 10_000,
        }
    }
}
