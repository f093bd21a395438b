//! Exact combinatorial algorithms.
//!
//! Provides small, deterministic, exhaustive algorithms — the exact
//! counterpart to the metaheuristic family:
//!
//! - **Sort**: in-place insertion sort that reports the number of
//!   inversions in the input (each element shift is one inversion).
//! - **Queens**: full enumeration of N-Queens placements by recursive
//!   backtracking, with deterministic solution ordering and optional
//!   streaming via an observer callback.
//!
//! # Architecture
//!
//! Every algorithm is self-contained and synchronous. There is no
//! shared state between modules and no randomness in the algorithms
//! themselves — consumers bring their own element types (anything
//! `Ord` sorts) and interpret the emitted boards as they see fit.

pub mod queens;
pub mod sort;
