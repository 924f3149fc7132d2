//! # Arithmetic on upper triangular matrices
//!
//! Done row by row, using the vector operations.
use itertools::Itertools;

use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::matrix::UpperTriangular;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::Vector;

impl<F: Element> UpperTriangular<F> {
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<F>, &Vector<F>) -> Result<Vector<F>, Error>,
    ) -> Result<Self, Error> {
        if self.order() != other.order() {
            return Err(Error::ShapeMismatch { left: self.order(), right: other.order() });
        }

        let rows = self.iter_rows()
            .zip_eq(other.iter_rows())
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from(Vector::from_data(rows, self.rows().start_index())))
    }

    /// Cell wise sum.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the orders differ, or if rows at the same position have a different
    /// length (only possible for matrices converted from arbitrary rows).
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, Vector::add)
    }

    /// Cell wise difference.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the orders differ, or if rows at the same position have a different
    /// length (only possible for matrices converted from arbitrary rows).
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, Vector::sub)
    }
}
