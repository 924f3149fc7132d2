//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures used to represent offset vectors and upper triangular
//! matrices in memory.

pub mod linear_algebra;
