//! # Upper triangular matrices
//!
//! A matrix of order `n` is stored as `n` rows, where row `i` is a `Vector` of length `n - i`
//! starting at index `i`. The cells below the diagonal are not stored and can't be accessed.
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use log::debug;
use num_traits::Zero;

use crate::data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
use crate::data::linear_algebra::error::{Error, InvalidArgument};
use crate::data::linear_algebra::vector::{validate_shape, Vector};

mod ops;

/// Square matrix with only the values on and above the diagonal stored.
///
/// Order is fixed at creation.
#[derive(Debug)]
pub struct UpperTriangular<F> {
    rows: Vector<Vector<F>>,
}

impl<F> UpperTriangular<F> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns, at most `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the order is negative or too large.
    pub fn new(order: isize) -> Result<Self, Error>
    where
        F: Zero + Clone,
    {
        if order > MAX_MATRIX_SIZE as isize {
            return Err(InvalidArgument::TooLarge {
                value: order as usize,
                maximum: MAX_MATRIX_SIZE,
            }.into());
        }
        // The row collection rejects negative lengths
        let (order, _) = validate_shape(order, 0, MAX_VECTOR_SIZE)?;

        Ok(Self::zeros(order))
    }

    fn zeros(order: usize) -> Self
    where
        F: Zero + Clone,
    {
        debug_assert!(order <= MAX_MATRIX_SIZE);
        debug!("Creating upper triangular matrix of order {}", order);

        let rows = (0..order).map(|i| Vector::zeros(order - i, i)).collect();

        Self { rows: Vector::from_data(rows, 0) }
    }

    /// Number of rows, which equals the number of columns.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// The rows of this matrix.
    pub fn rows(&self) -> &Vector<Vector<F>> {
        &self.rows
    }

    /// Iterate over the rows, starting with the longest.
    pub fn iter_rows(&self) -> Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    /// Iterate mutably over the rows.
    ///
    /// Values can be changed freely, but the length and start index of each row should be kept.
    /// Rows of another shape are only meant to enter through `From<Vector<Vector<F>>>`.
    pub fn iter_rows_mut(&mut self) -> IterMut<'_, Vector<F>> {
        self.rows.iter_mut()
    }

    /// Row `row`, valid column indices of which are `row..order`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the row doesn't exist.
    pub fn row(&self, row: isize) -> Result<&Vector<F>, Error> {
        self.rows.get(row)
    }

    /// Mutable row, see `row`.
    pub fn row_mut(&mut self, row: isize) -> Result<&mut Vector<F>, Error> {
        self.rows.get_mut(row)
    }

    /// Value at a cell on or above the diagonal.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the row doesn't exist, or the column is not in `row..order`.
    pub fn get(&self, row: isize, column: isize) -> Result<&F, Error> {
        self.row(row)?.get(column)
    }

    /// Mutable value at a cell on or above the diagonal, see `get`.
    pub fn get_mut(&mut self, row: isize, column: isize) -> Result<&mut F, Error> {
        self.row_mut(row)?.get_mut(column)
    }

    /// Set the value of a cell on or above the diagonal.
    pub fn set(&mut self, row: isize, column: isize, value: F) -> Result<(), Error> {
        self.row_mut(row)?.set(column, value)
    }

    /// Make this matrix a copy of `other`.
    ///
    /// Rows are only reallocated where their shapes differ.
    pub fn assign(&mut self, other: &Self) -> &mut Self
    where
        F: Clone,
    {
        if self.order() != other.order() {
            debug!("Changing matrix order from {} to {}", self.order(), other.order());
        }
        self.rows.assign(&other.rows);

        self
    }
}

impl<F> From<Vector<Vector<F>>> for UpperTriangular<F> {
    /// Adopt the rows as they are, without checking that they have a triangular shape.
    fn from(rows: Vector<Vector<F>>) -> Self {
        Self { rows }
    }
}

impl<F: Zero + Clone> Default for UpperTriangular<F> {
    /// Zero matrix of order ten.
    fn default() -> Self {
        Self::zeros(10)
    }
}

impl<F: Clone> Clone for UpperTriangular<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<F: PartialEq> PartialEq for UpperTriangular<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.order() != other.order() {
            return false;
        }

        self.rows.iter().zip(other.rows.iter()).all(|(left, right)| left == right)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        if self.order() != other.order() {
            return true;
        }

        self.rows.iter().zip(other.rows.iter()).any(|(left, right)| left != right)
    }
}

impl<F: Eq> Eq for UpperTriangular<F> {}

impl<F> Index<isize> for UpperTriangular<F> {
    type Output = Vector<F>;

    fn index(&self, row: isize) -> &Self::Output {
        &self.rows[row]
    }
}

impl<F> IndexMut<isize> for UpperTriangular<F> {
    fn index_mut(&mut self, row: isize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

impl<F: fmt::Display> fmt::Display for UpperTriangular<F> {
    /// One row per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
