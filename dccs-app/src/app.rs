//! Headless demo runner: plays the whole timeline with a simulated
//! participant on a hand-advanced clock, then prints the summary and the
//! result log. Stands in for the host experiment runner.

use anyhow::Result;
use dccs_core::{Phase, SortTrial, TaskPhase};
use dccs_task::{summarize, TaskConfig, TaskSession, SessionEvent};
use dccs_timeline::{build_timeline, text, Narrator, Screen, ScreenContent};
use dccs_timing::ManualTimer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Chance the simulated participant picks the correct card
const SIM_ACCURACY: f64 = 0.85;
/// Every n-th test trial the participant stalls past the reminder delay
const SIM_STALL_EVERY: usize = 9;

struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn speak(&mut self, text: &str) {
        println!("  [voice] {text}");
    }
}

pub struct App {
    config: TaskConfig,
    session: TaskSession<ManualTimer>,
    clock: ManualTimer,
    rng: StdRng,
    narrator: ConsoleNarrator,
}

impl App {
    pub fn new() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        let config = TaskConfig {
            audio_enabled: args.iter().any(|a| a == "--audio"),
            ..TaskConfig::default()
        };
        let seed = args
            .iter()
            .position(|a| a == "--seed")
            .and_then(|i| args.get(i + 1))
            .map(|s| s.parse::<u64>())
            .transpose()?
            .unwrap_or_else(|| rand::rng().random());

        let clock = ManualTimer::new();
        let session = TaskSession::new(config.clone(), clock.clone());
        Ok(Self {
            config,
            session,
            clock,
            rng: StdRng::seed_from_u64(seed),
            narrator: ConsoleNarrator,
        })
    }

    pub fn run(mut self) -> Result<()> {
        println!("=== DIMENSIONAL CHANGE CARD SORT ===");
        println!(
            "Blocks: {} practice, {} per test, {} mixed\n",
            self.config.practice_trials, self.config.test_trials, self.config.mixed_trials
        );

        let timeline = build_timeline(&self.config, &mut self.rng);
        for screen in timeline {
            self.show(screen);
        }

        println!("\n{}", serde_json::to_string_pretty(self.session.records())?);
        Ok(())
    }

    fn show(&mut self, screen: Screen) {
        match screen.content {
            ScreenContent::Instruction { html: _ } => {
                if let Some(line) = &screen.narration {
                    println!("--- {line}");
                    if self.session.audio_enabled() {
                        self.narrator.speak(line);
                    }
                }
            }
            ScreenContent::Trial { trial, phase } => self.run_trial(trial, phase),
            ScreenContent::Summary => self.show_summary(),
        }
    }

    fn run_trial(&mut self, trial: SortTrial, phase: TaskPhase) {
        self.session.begin_trial(trial, phase);
        let id = self.session.trial_number();

        // Stall occasionally on no-feedback trials to exercise the reminder
        if !phase.gives_feedback() && id % SIM_STALL_EVERY == SIM_STALL_EVERY - 1 {
            self.clock
                .advance(Duration::from_millis(self.config.reminder_delay_ms));
            for event in self.session.update() {
                if event == SessionEvent::RemindDue {
                    println!("  ({}) ...{}", phase.label(), text::REMINDER);
                    if self.session.audio_enabled() {
                        self.narrator.speak(text::REMINDER);
                    }
                }
            }
        }

        let rt_ms: u64 = self.rng.random_range(400..1400);
        self.clock.advance(Duration::from_millis(rt_ms));
        let choice = if self.rng.random_bool(SIM_ACCURACY) {
            trial.correct_index
        } else {
            1 - trial.correct_index
        };

        if let Some(result) = self.session.respond(choice) {
            println!(
                "  ({}) trial {:>2}: target {:<11} chose {:<11} {} {} ms",
                phase.label(),
                id,
                trial.target.name,
                trial.choice(choice).name,
                if result.correct { "ok " } else { "ERR" },
                result.reaction_time_ms,
            );
            if phase.gives_feedback() {
                let dimension = trial.dimension.or_else(|| phase.fixed_dimension());
                if let Some(dimension) = dimension {
                    let line = if result.correct {
                        text::FEEDBACK_CORRECT.to_string()
                    } else {
                        text::feedback_incorrect(dimension)
                    };
                    println!("         {line}");
                    if self.session.audio_enabled() {
                        self.narrator.speak(&line);
                    }
                }
            }
        }

        // Poll until the hold time elapses, as the host loop would
        loop {
            if self
                .session
                .update()
                .contains(&SessionEvent::TrialComplete)
            {
                break;
            }
            self.clock.advance(Duration::from_millis(100));
        }
        self.session.finish_trial();
    }

    fn show_summary(&mut self) {
        println!("\n--- Results ---");
        for s in summarize(self.session.records()) {
            println!(
                "{:<15} {:>3} trials  {:>3}% correct  mean RT {} ms",
                s.phase,
                s.trials,
                s.accuracy_pct,
                s.mean_rt_ms.unwrap_or(0),
            );
        }
    }
}
