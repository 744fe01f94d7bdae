mod cell;
mod board;
mod error;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use board::{Board, compute_next_generation};
pub use error::{LifeError, Result};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
