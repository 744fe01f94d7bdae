use crate::domain::{Algorithm, Board};
use tracing::debug;

/// Simulation drives the generation sequence.
/// It yields the initial board followed by `iterations` successors; every
/// yielded board is handed to the caller, only the next pending one is kept.
pub struct Simulation {
    pending: Option<Board>,
    algorithm: Algorithm,
    generation: u64,
    remaining: usize,
}

impl Simulation {
    /// Create a simulation that will emit `iterations + 1` boards
    pub fn new(initial: Board, iterations: usize) -> Self {
        Self {
            pending: Some(initial),
            algorithm: Algorithm::default(),
            generation: 0,
            remaining: iterations,
        }
    }

    /// Select the stepping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Generation number of the next board to be yielded
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

impl Iterator for Simulation {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let current = self.pending.take()?;
        debug!(
            generation = self.generation,
            population = current.population(),
            "emitting generation"
        );

        if self.remaining > 0 {
            self.remaining -= 1;
            self.pending = Some(self.algorithm.step(&current));
        }
        self.generation += 1;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.pending.is_some() { self.remaining + 1 } else { 0 };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Simulation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_zero_iterations_yields_initial_only() {
        let initial = presets::demo().framed().unwrap();
        let boards: Vec<_> = Simulation::new(initial.clone(), 0).collect();
        assert_eq!(boards, vec![initial]);
    }

    #[test]
    fn test_yields_iterations_plus_one() {
        let sim = Simulation::new(presets::blinker().framed().unwrap(), 5);
        assert_eq!(sim.len(), 6);
        assert_eq!(sim.count(), 6);
    }

    #[test]
    fn test_each_board_follows_its_predecessor() {
        let boards: Vec<_> = Simulation::new(presets::demo().framed().unwrap(), 6).collect();
        for pair in boards.windows(2) {
            assert_eq!(pair[0].next_generation(), pair[1]);
            assert_eq!(pair[0].dimensions(), pair[1].dimensions());
        }
    }

    #[test]
    fn test_parallel_sequence_matches_serial() {
        let initial = presets::glider().place(8, 8, 0, 0).unwrap();
        let serial: Vec<_> = Simulation::new(initial.clone(), 10).collect();
        let parallel: Vec<_> = Simulation::new(initial, 10)
            .with_algorithm(Algorithm::Parallel)
            .collect();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_generation_counter() {
        let mut sim = Simulation::new(presets::block().framed().unwrap(), 2);
        assert_eq!(sim.generation(), 0);
        sim.next();
        sim.next();
        assert_eq!(sim.generation(), 2);
        sim.next();
        assert!(sim.next().is_none());
        assert_eq!(sim.len(), 0);
    }
}
