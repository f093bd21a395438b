//! Insertion sort with inversion counting.
//!
//! A simple quadratic sort that doubles as an inversion counter: every
//! leftward shift of a key past a strictly greater predecessor undoes
//! exactly one inversion, so the number of shifts performed equals the
//! number of inversions in the input.
//!
//! # References
//!
//! - Cormen, Leiserson, Rivest & Stein, "Introduction to Algorithms",
//!   §2.1 (insertion sort) and problem 2-4 (inversions)
//! - Knuth, "The Art of Computer Programming" Vol. 3, §5.1.1

mod insertion;

pub use insertion::{count_inversions, insertion_sort};
