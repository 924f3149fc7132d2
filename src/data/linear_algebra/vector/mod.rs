//! # Offset indexed vector
//!
//! Wrapping a `Vec` such that it has a fixed length and a first logical index that is not
//! necessarily zero. Logical index `i` lives at offset `i - start_index` of the underlying data.
use std::fmt;
use std::ops::{Index, IndexMut, Range};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use log::trace;
use num_traits::Zero;

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::error::{Error, InvalidArgument};

mod ops;

/// Dense vector with a start index. Length is fixed at creation.
///
/// Valid logical indices are `start_index..start_index + len`.
#[derive(Debug)]
pub struct Vector<F> {
    data: Vec<F>,
    start_index: usize,
}

/// Validate a requested `(length, start index)` pair.
///
/// # Arguments
///
/// * `len`: Number of elements, should be in `0..=maximum`.
/// * `start_index`: First logical index, should not be negative.
/// * `maximum`: Largest allowed length.
///
/// # Return value
///
/// The same pair, now known to be representable as unsigned values.
pub(crate) fn validate_shape(
    len: isize,
    start_index: isize,
    maximum: usize,
) -> Result<(usize, usize), InvalidArgument> {
    if len < 0 {
        return Err(InvalidArgument::NegativeLength(len));
    }
    if start_index < 0 {
        return Err(InvalidArgument::NegativeStartIndex(start_index));
    }
    let len = len as usize;
    if len > maximum {
        return Err(InvalidArgument::TooLarge { value: len, maximum });
    }

    Ok((len, start_index as usize))
}

impl<F> Vector<F> {
    /// Create a vector with all values being zero.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either argument is negative or the length is too large.
    pub fn new(len: isize, start_index: isize) -> Result<Self, Error>
    where
        F: Zero + Clone,
    {
        let (len, start_index) = validate_shape(len, start_index, MAX_VECTOR_SIZE)?;

        Ok(Self::zeros(len, start_index))
    }

    pub(crate) fn zeros(len: usize, start_index: usize) -> Self
    where
        F: Zero + Clone,
    {
        debug_assert!(len <= MAX_VECTOR_SIZE);

        Self { data: vec![F::zero(); len], start_index }
    }

    /// Wrap existing values, the first of which gets logical index `start_index`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the start index is negative or there are too many values.
    pub fn from_values(values: Vec<F>, start_index: isize) -> Result<Self, Error> {
        if start_index < 0 {
            return Err(InvalidArgument::NegativeStartIndex(start_index).into());
        }
        if values.len() > MAX_VECTOR_SIZE {
            return Err(InvalidArgument::TooLarge {
                value: values.len(),
                maximum: MAX_VECTOR_SIZE,
            }.into());
        }

        Ok(Self::from_data(values, start_index as usize))
    }

    pub(crate) fn from_data(data: Vec<F>, start_index: usize) -> Self {
        debug_assert!(data.len() <= MAX_VECTOR_SIZE);

        Self { data, start_index }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the logical index of the last element.
    pub fn end_index(&self) -> usize {
        self.start_index + self.len()
    }

    /// Range of valid logical indices.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index()
    }

    /// Map a logical index to an offset in the data.
    fn offset(&self, index: isize) -> Result<usize, Error> {
        match index.checked_sub(self.start_index as isize) {
            Some(offset) if offset >= 0 && (offset as usize) < self.len() => Ok(offset as usize),
            _ => Err(Error::IndexOutOfRange { index, range: self.indices() }),
        }
    }

    /// Element at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `start_index <= index < start_index + len`.
    pub fn get(&self, index: isize) -> Result<&F, Error> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Mutable element at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `start_index <= index < start_index + len`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut F, Error> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Set the value at a logical index.
    pub fn set(&mut self, index: isize, value: F) -> Result<(), Error> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values in storage order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values in storage order.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// All values, the first one being at the start index.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    fn same_shape(&self, other: &Self) -> bool {
        self.len() == other.len() && self.start_index == other.start_index
    }

    /// Make this vector a copy of `other`, adopting its length and start index.
    ///
    /// Storage is only reallocated when the shapes differ.
    pub fn assign(&mut self, other: &Self) -> &mut Self
    where
        F: Clone,
    {
        if !self.same_shape(other) {
            trace!(
                "Reshaping vector from ({}, {}) to ({}, {})",
                self.len(), self.start_index, other.len(), other.start_index,
            );
            self.start_index = other.start_index;
        }
        self.data.clone_from(&other.data);

        self
    }
}

impl<F: Zero + Clone> Default for Vector<F> {
    /// Ten zeros, starting at index zero.
    fn default() -> Self {
        Self::zeros(10, 0)
    }
}

impl<F: Clone> Clone for Vector<F> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<F: PartialEq> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        if !self.same_shape(other) {
            return false;
        }

        self.data.iter().zip(&other.data).all(|(left, right)| left == right)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        if !self.same_shape(other) {
            return true;
        }

        self.data.iter().zip(&other.data).any(|(left, right)| left != right)
    }
}

impl<F: Eq> Eq for Vector<F> {}

impl<F> Index<isize> for Vector<F> {
    type Output = F;

    /// Panicking version of `get`.
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F> IndexMut<isize> for Vector<F> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, F> IntoIterator for &'a Vector<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F: fmt::Display> fmt::Display for Vector<F> {
    /// Values in storage order, separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
