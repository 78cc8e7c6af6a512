use crate::catalogue::{CHOICE_PAIR, TARGET_POOL};
use dccs_core::{CardStimulus, Dimension, SortTrial};
use rand::Rng;

/// Generates the mixed block: `count` trials whose rule alternates by
/// index parity, with a uniformly drawn target and a 50% left/right swap
/// of the choice pair. Eager and restartable; `count = 0` is empty.
pub fn generate_mixed<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<SortTrial> {
    (0..count)
        .map(|i| {
            let dimension = Dimension::for_trial_index(i);
            let target = TARGET_POOL[rng.random_range(0..TARGET_POOL.len())];
            let swap = rng.random_bool(0.5);
            build_trial(dimension, target, swap)
        })
        .collect()
}

/// Pure trial constructor. `swap = false` keeps the base choice order.
/// Correctness is resolved by checking the left card and defaulting to the
/// right; the catalogue guarantees exactly one side matches.
pub fn build_trial(dimension: Dimension, target: CardStimulus, swap: bool) -> SortTrial {
    let [first, second] = CHOICE_PAIR;
    let (left, right) = if swap { (second, first) } else { (first, second) };
    debug_assert!(left.matches(&target, dimension) != right.matches(&target, dimension));
    let correct_index = if left.matches(&target, dimension) { 0 } else { 1 };
    SortTrial {
        target,
        left,
        right,
        correct_index,
        dimension: Some(dimension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{BLUE_BOAT, RED_RABBIT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_exactly_n_trials() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0, 1, 2, 13, 64] {
            assert_eq!(generate_mixed(n, &mut rng).len(), n);
        }
    }

    #[test]
    fn dimension_alternates_by_parity() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = generate_mixed(10, &mut rng);
        for (i, trial) in trials.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Dimension::Color
            } else {
                Dimension::Shape
            };
            assert_eq!(trial.dimension, Some(expected));
        }
    }

    #[test]
    fn generated_trials_are_well_posed() {
        let mut rng = StdRng::seed_from_u64(42);
        for trial in generate_mixed(200, &mut rng) {
            let dimension = trial.dimension.unwrap();
            let left = trial.left.matches(&trial.target, dimension);
            let right = trial.right.matches(&trial.target, dimension);
            assert_ne!(left, right);
            assert_eq!(trial.correct_index, if left { 0 } else { 1 });
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_seeded_rng() {
        let a = generate_mixed(24, &mut StdRng::seed_from_u64(99));
        let b = generate_mixed(24, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn no_swap_keeps_the_base_choice_order() {
        let trial = build_trial(Dimension::Color, RED_RABBIT, false);
        assert_eq!(trial.left, CHOICE_PAIR[0]);
        assert_eq!(trial.right, CHOICE_PAIR[1]);

        let swapped = build_trial(Dimension::Color, RED_RABBIT, true);
        assert_eq!(swapped.left, CHOICE_PAIR[1]);
        assert_eq!(swapped.right, CHOICE_PAIR[0]);
    }

    #[test]
    fn correct_index_follows_the_active_dimension() {
        // red rabbit: color -> red boat (right), shape -> blue rabbit (left)
        assert_eq!(build_trial(Dimension::Color, RED_RABBIT, false).correct_index, 1);
        assert_eq!(build_trial(Dimension::Shape, RED_RABBIT, false).correct_index, 0);
        // blue boat: color -> blue rabbit (left), shape -> red boat (right)
        assert_eq!(build_trial(Dimension::Color, BLUE_BOAT, false).correct_index, 0);
        assert_eq!(build_trial(Dimension::Shape, BLUE_BOAT, false).correct_index, 1);
        // swapping the pair flips the index
        assert_eq!(build_trial(Dimension::Color, RED_RABBIT, true).correct_index, 0);
    }
}
