//! # Reading values as text
//!
//! The values of a vector are read in storage order. A matrix is read row by row, each row being
//! read like a vector. Line breaks carry no meaning, the number of values read is determined by
//! the shape of the container being read into.
use std::fmt::Display;
use std::str::FromStr;

use crate::data::linear_algebra::{UpperTriangular, Vector};
use crate::io::error::ParseError;
use crate::io::tokens::{ParseResult, Tokens};

/// Containers whose values can be overwritten from text.
pub trait ReadText {
    /// Read exactly as many values as this container holds.
    ///
    /// # Errors
    ///
    /// When the tokens run out, or a token can't be parsed.
    fn read_text(&mut self, tokens: &mut Tokens<'_>) -> ParseResult<()>;
}

impl<F> ReadText for Vector<F>
where
    F: FromStr,
    F::Err: Display,
{
    /// Values are only written when all of them could be read.
    fn read_text(&mut self, tokens: &mut Tokens<'_>) -> ParseResult<()> {
        let values = (0..self.len())
            .map(|_| tokens.parse_next())
            .collect::<ParseResult<Vec<F>>>()?;

        for (slot, value) in self.iter_mut().zip(values) {
            *slot = value;
        }

        Ok(())
    }
}

impl<F> ReadText for UpperTriangular<F>
where
    F: FromStr,
    F::Err: Display,
{
    /// Rows that were read before a failing row keep their new values.
    fn read_text(&mut self, tokens: &mut Tokens<'_>) -> ParseResult<()> {
        for (i, row) in self.iter_rows_mut().enumerate() {
            row.read_text(tokens)
                .map_err(|error| ParseError::with_cause(format!("Failed to read row {}", i), error))?;
        }

        Ok(())
    }
}
