//! # Linear algebra primitives
//!
//! Dense, offset indexed vectors and the upper triangular matrices composed out of them.
pub use error::{Error, InvalidArgument};
pub use matrix::UpperTriangular;
pub use traits::Element;
pub use vector::Vector;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `Vector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest order of an `UpperTriangular` matrix.
pub const MAX_MATRIX_SIZE: usize = 10_000;
