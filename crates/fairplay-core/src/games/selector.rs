//! Machine move selection.

use super::moves::{Move, MoveSet};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Picks the machine's move uniformly from a move set.
///
/// This is a general-purpose generator on purpose: only the key needs a
/// CSPRNG. `gen_range` samples without modulo bias.
#[derive(Clone, Debug)]
pub struct MoveSelector<R = ThreadRng> {
    rng: R,
}

impl MoveSelector<ThreadRng> {
    /// Selector backed by the thread-local generator
    pub fn thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for MoveSelector<ThreadRng> {
    fn default() -> Self {
        Self::thread_rng()
    }
}

impl<R: Rng> MoveSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one move
    pub fn select(&mut self, moves: &MoveSet) -> Move {
        let index = self.rng.gen_range(0..moves.len());
        moves.at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_selection_is_a_member() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let mut selector = MoveSelector::thread_rng();

        for _ in 0..100 {
            let m = selector.select(&moves);
            assert_eq!(moves.get(m.id()).unwrap(), m);
        }
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e"]).unwrap();
        let mut first = MoveSelector::new(StdRng::seed_from_u64(7));
        let mut second = MoveSelector::new(StdRng::seed_from_u64(7));

        for _ in 0..20 {
            assert_eq!(first.select(&moves), second.select(&moves));
        }
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let mut selector = MoveSelector::new(StdRng::seed_from_u64(42));
        let mut counts = [0usize; 7];
        let draws = 70_000;

        for _ in 0..draws {
            counts[selector.select(&moves).id() - 1] += 1;
        }

        // Expected 10_000 each; 5 sigma is about 470.
        for (i, count) in counts.iter().enumerate() {
            assert!(
                (9_400..=10_600).contains(count),
                "move {} drawn {} times",
                i + 1,
                count
            );
        }
    }
}
