//! # Offset indexed vectors and upper triangular matrices
//!
//! A `Vector` is a fixed length sequence of numbers whose first valid index is a chosen start
//! index. An `UpperTriangular` matrix of order `n` is built out of `n` such vectors: row `i` has
//! length `n - i` and starts at index `i`, so only the cells on or above the diagonal exist.
//!
//! Both containers have value semantics: cloning copies all elements and every arithmetic
//! operation produces a new value.
#![warn(missing_docs)]

pub mod data;
pub mod io;
