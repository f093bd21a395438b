//! N-Queens enumeration by backtracking.
//!
//! Enumerates every placement of N non-attacking queens on an N×N
//! board. The search proceeds column by column, trying rows in
//! ascending order and undoing each placement on return, so the
//! solution order is deterministic and reproducible.
//!
//! This is a full enumeration, not a first-solution search: reaching a
//! complete placement emits it and backtracks to visit every remaining
//! one (unless a solution cap is configured).
//!
//! # References
//!
//! - Bell & Stevens (2009), "A survey of known results and research
//!   areas for n-queens"
//! - Knuth, "The Art of Computer Programming" Vol. 4B, §7.2.2
//!   (backtrack programming)

mod config;
mod runner;
mod types;

pub use config::QueensConfig;
pub use runner::{QueensResult, QueensRunner};
pub use types::{Board, Cell};
