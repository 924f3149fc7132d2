//! # Errors of vector and matrix operations
//!
//! All failures are signalled at the call that caused them, before anything is allocated or
//! modified. Each variant carries the offending value so that callers can tell them apart.
use std::error;
use std::fmt;
use std::ops::Range;

/// Failure of a construction, access or arithmetic operation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A length, order or start index given at construction can't be used.
    InvalidArgument(InvalidArgument),
    /// An element or row was requested outside of the valid logical indices.
    IndexOutOfRange {
        /// Logical index that was requested.
        index: isize,
        /// Logical indices that are valid for the accessed vector.
        range: Range<usize>,
    },
    /// Operands of a binary operation have a different length or order.
    ShapeMismatch {
        /// Length or order of the receiver.
        left: usize,
        /// Length or order of the argument.
        right: usize,
    },
}

/// Describes why a construction parameter was rejected.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InvalidArgument {
    /// Lengths and orders can't be negative.
    NegativeLength(isize),
    /// Start indices can't be negative.
    NegativeStartIndex(isize),
    /// The length or order exceeds the largest supported value.
    TooLarge {
        /// Requested length or order.
        value: usize,
        /// Largest allowed value.
        maximum: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(argument) => write!(f, "invalid argument: {}", argument),
            Error::IndexOutOfRange { index, range } => write!(
                f,
                "index {} out of range, valid indices are {}..{}",
                index, range.start, range.end,
            ),
            Error::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: operands have sizes {} and {}",
                left, right,
            ),
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidArgument::NegativeLength(len) => write!(f, "negative length {}", len),
            InvalidArgument::NegativeStartIndex(index) => {
                write!(f, "negative start index {}", index)
            },
            InvalidArgument::TooLarge { value, maximum } => {
                write!(f, "size {} exceeds the maximum of {}", value, maximum)
            },
        }
    }
}

impl From<InvalidArgument> for Error {
    fn from(argument: InvalidArgument) -> Self {
        Error::InvalidArgument(argument)
    }
}
