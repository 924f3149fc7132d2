//! # Traits for elements of vectors and matrices
//!
//! Only the arithmetic operations actually used by the containers are required. The right hand
//! side of each operation is a reference, such that values which are expensive to clone (like big
//! rationals) are only cloned once per operation.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Element of a `Vector` or `UpperTriangular` matrix on which arithmetic can be done.
///
/// `Zero` is needed to create zero initialized containers and to seed the inner product.
pub trait Element:
    Zero +

    for<'r> Add<&'r Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +

    PartialEq +
    Clone +
    Display +
    Debug +
{
}

impl<T> Element for T
where
    T: Zero +
        for<'r> Add<&'r T, Output=T> +
        for<'r> Sub<&'r T, Output=T> +
        for<'r> Mul<&'r T, Output=T> +
        PartialEq +
        Clone +
        Display +
        Debug,
{
}
