//! # Arithmetic on vectors
//!
//! None of these operations modify their operands: each returns a new vector with the shape of
//! the receiver.
use itertools::Itertools;

use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::Vector;

impl<F: Element> Vector<F> {
    fn map_values(&self, f: impl Fn(&F) -> F) -> Self {
        Self::from_data(self.data.iter().map(f).collect(), self.start_index)
    }

    /// Add `value` to every element.
    pub fn add_scalar(&self, value: &F) -> Self {
        self.map_values(|x| x.clone() + value)
    }

    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: &F) -> Self {
        self.map_values(|x| x.clone() - value)
    }

    /// Multiply every element by `value`.
    pub fn mul_scalar(&self, value: &F) -> Self {
        self.map_values(|x| x.clone() * value)
    }

    fn check_len(&self, other: &Self) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch { left: self.len(), right: other.len() })
        }
    }

    fn zip_values(&self, other: &Self, f: impl Fn(&F, &F) -> F) -> Result<Self, Error> {
        self.check_len(other)?;

        let data = self.data.iter()
            .zip_eq(&other.data)
            .map(|(left, right)| f(left, right))
            .collect();

        Ok(Self::from_data(data, self.start_index))
    }

    /// Element wise sum.
    ///
    /// The start index of `other` is ignored, the result has the start index of `self`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        self.zip_values(other, |left, right| left.clone() + right)
    }

    /// Element wise difference.
    ///
    /// The start index of `other` is ignored, the result has the start index of `self`.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.zip_values(other, |left, right| left.clone() - right)
    }

    /// Sum of the pairwise products, starting from zero.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<F, Error> {
        self.check_len(other)?;

        let mut total = F::zero();
        for (left, right) in self.data.iter().zip_eq(&other.data) {
            total = total + left.clone() * right;
        }

        Ok(total)
    }
}
