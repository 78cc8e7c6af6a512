use crate::config::TaskConfig;
use dccs_core::{Dimension, Phase, ResponseState, SortResult, SortTrial, TaskPhase, TrialRecord};
use dccs_timing::Timer;

/// Events the host acts on between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The active trial's hold time elapsed; show the next screen
    TrialComplete,
    /// The participant has stalled; prompt them to respond
    RemindDue,
}

struct ActiveTrial {
    trial: SortTrial,
    phase: TaskPhase,
    id: usize,
    /// Rule in force, resolved once from the trial or its phase
    dimension: Dimension,
    shown_at: u64,
    state: ResponseState,
    complete_at: Option<u64>,
    reminded: bool,
}

/// Runtime state for one participant run: evaluates responses, holds the
/// per-trial latch and deadlines, and accumulates the result log.
///
/// Host-driven: `begin_trial` on show, `respond` on click, `update` every
/// tick, `finish_trial` once `TrialComplete` is observed.
pub struct TaskSession<T: Timer<Timestamp = u64>> {
    config: TaskConfig,
    timer: T,
    active: Option<ActiveTrial>,
    trial_number: usize,
    records: Vec<TrialRecord>,
}

impl<T: Timer<Timestamp = u64>> TaskSession<T> {
    pub fn new(config: TaskConfig, timer: T) -> Self {
        Self {
            config,
            timer,
            active: None,
            trial_number: 0,
            records: Vec::new(),
        }
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    pub fn audio_enabled(&self) -> bool {
        self.config.audio_enabled
    }

    /// On-shown hook: arms the latch and stamps the presentation time
    pub fn begin_trial(&mut self, trial: SortTrial, phase: TaskPhase) {
        let dimension = trial
            .dimension
            .or_else(|| phase.fixed_dimension())
            .unwrap_or(Dimension::Color);
        self.active = Some(ActiveTrial {
            trial,
            phase,
            id: self.trial_number,
            dimension,
            shown_at: self.timer.now(),
            state: ResponseState::AwaitingResponse,
            complete_at: None,
            reminded: false,
        });
    }

    pub fn active_trial(&self) -> Option<&SortTrial> {
        self.active.as_ref().map(|a| &a.trial)
    }

    pub fn active_state(&self) -> Option<ResponseState> {
        self.active.as_ref().map(|a| a.state)
    }

    /// Accepts the first response for the active trial and records it.
    /// Further calls for the same trial are no-ops returning `None`.
    pub fn respond(&mut self, index: usize) -> Option<SortResult> {
        let active = self.active.as_mut()?;
        if active.state == ResponseState::Responded {
            return None;
        }
        active.state = ResponseState::Responded;

        let now = self.timer.now();
        let correct = index == active.trial.correct_index;
        let result = SortResult {
            selected_index: index,
            correct,
            reaction_time_ms: self.timer.elapsed(active.shown_at).as_millis() as u64,
        };

        // Feedback screens hold the trial open; test trials finish at once
        let hold_ms = if active.phase.gives_feedback() {
            if correct {
                self.config.feedback_ms
            } else {
                self.config.incorrect_feedback_ms
            }
        } else {
            0
        };
        active.complete_at = Some(now + hold_ms * 1_000_000);

        self.records.push(TrialRecord {
            phase: active.phase.label(),
            trial_id: active.id,
            dimension: active.dimension,
            result,
        });
        Some(result)
    }

    /// Deadline poll. Late firings are checked against the latch and the
    /// reminded flag, so a stale deadline never acts twice.
    pub fn update(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let now = self.timer.now();
        let Some(active) = self.active.as_mut() else {
            return events;
        };

        match active.state {
            ResponseState::AwaitingResponse => {
                let remind_ns = self.config.reminder_delay_ms * 1_000_000;
                if !active.reminded
                    && !active.phase.gives_feedback()
                    && now.saturating_sub(active.shown_at) >= remind_ns
                {
                    active.reminded = true;
                    events.push(SessionEvent::RemindDue);
                }
            }
            ResponseState::Responded => {
                if active.complete_at.is_some_and(|t| now >= t) {
                    active.complete_at = None;
                    events.push(SessionEvent::TrialComplete);
                }
            }
        }
        events
    }

    /// On-finished hook: clears the active trial
    pub fn finish_trial(&mut self) {
        self.active = None;
        self.trial_number += 1;
    }

    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    pub fn trial_number(&self) -> usize {
        self.trial_number
    }
}
