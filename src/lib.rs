// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Generation sequence driver
pub mod application;

// Infrastructure layer - console output, command line
pub mod rendering;
pub mod cli;

// Re-exports for convenience
pub use domain::{Algorithm, Board, Cell, LifeError, Pattern, compute_next_generation, presets};
pub use application::Simulation;
