use dccs_core::TrialRecord;
use serde::Serialize;

/// Per-phase aggregate shown on the results screen
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummary {
    pub phase: &'static str,
    pub trials: usize,
    pub correct: usize,
    /// correct / trials x 100, rounded to the nearest integer
    pub accuracy_pct: u32,
    /// Mean reaction time over the phase, `None` when no trials ran
    pub mean_rt_ms: Option<u64>,
}

/// Folds the result log into one summary per phase, in first-seen order
pub fn summarize(records: &[TrialRecord]) -> Vec<PhaseSummary> {
    let mut phases: Vec<&'static str> = Vec::new();
    for record in records {
        if !phases.contains(&record.phase) {
            phases.push(record.phase);
        }
    }

    phases
        .into_iter()
        .map(|phase| {
            let rows: Vec<&TrialRecord> = records.iter().filter(|r| r.phase == phase).collect();
            let trials = rows.len();
            let correct = rows.iter().filter(|r| r.result.correct).count();
            let accuracy_pct = ((correct as f64 / trials as f64) * 100.0).round() as u32;
            let rt_sum: u64 = rows.iter().map(|r| r.result.reaction_time_ms).sum();
            let mean_rt_ms = (trials > 0).then(|| rt_sum / trials as u64);
            PhaseSummary {
                phase,
                trials,
                correct,
                accuracy_pct,
                mean_rt_ms,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dccs_core::{Dimension, SortResult};

    fn record(phase: &'static str, correct: bool, rt: u64) -> TrialRecord {
        TrialRecord {
            phase,
            trial_id: 0,
            dimension: Dimension::Color,
            result: SortResult {
                selected_index: 0,
                correct,
                reaction_time_ms: rt,
            },
        }
    }

    #[test]
    fn four_of_five_correct_is_eighty_percent() {
        let records: Vec<_> = (0..5)
            .map(|i| record("color-test", i != 2, 500))
            .collect();
        let summary = summarize(&records);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].trials, 5);
        assert_eq!(summary[0].correct, 4);
        assert_eq!(summary[0].accuracy_pct, 80);
    }

    #[test]
    fn accuracy_rounds_to_nearest_integer() {
        let one_of_three = vec![
            record("mixed", true, 400),
            record("mixed", false, 400),
            record("mixed", false, 400),
        ];
        assert_eq!(summarize(&one_of_three)[0].accuracy_pct, 33);

        let two_of_three = vec![
            record("mixed", true, 400),
            record("mixed", true, 400),
            record("mixed", false, 400),
        ];
        assert_eq!(summarize(&two_of_three)[0].accuracy_pct, 67);
    }

    #[test]
    fn phases_stay_separate_and_in_first_seen_order() {
        let records = vec![
            record("color-test", true, 300),
            record("shape-test", false, 900),
            record("color-test", true, 500),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].phase, "color-test");
        assert_eq!(summary[0].mean_rt_ms, Some(400));
        assert_eq!(summary[1].phase, "shape-test");
        assert_eq!(summary[1].accuracy_pct, 0);
    }

    #[test]
    fn empty_log_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }
}
