//! # Splitting text into values
//!
//! Values are separated by any amount of whitespace, including line breaks. Each token remembers
//! the line it was found on, such that parse errors can point at it.
use std::fmt::Display;
use std::iter::Enumerate;
use std::str::{FromStr, Lines, SplitWhitespace};

use crate::io::error::{FileLocation, ParseError};

/// Result of a parsing step.
pub type ParseResult<T> = Result<T, ParseError>;

/// Iterator over the whitespace separated tokens of a text.
#[derive(Clone)]
pub struct Tokens<'a> {
    lines: Enumerate<Lines<'a>>,
    line: FileLocation<'a>,
    words: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    /// Start at the beginning of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            line: (0, ""),
            words: "".split_whitespace(),
        }
    }

    /// Parse the next token as a value.
    ///
    /// # Errors
    ///
    /// When there are no tokens left, or the token can't be parsed.
    pub fn parse_next<F>(&mut self) -> ParseResult<F>
    where
        F: FromStr,
        F::Err: Display,
    {
        match self.next() {
            Some((word, location)) => word.parse().map_err(|error| {
                ParseError::with_file_location(
                    format!("Failed to parse value text \"{}\": {}", word, error),
                    location,
                )
            }),
            None => Err(ParseError::new("Unexpected end of input")),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (&'a str, FileLocation<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.words.next() {
                return Some((word, self.line));
            }

            let (number, line) = self.lines.next()?;
            // Count from 1
            self.line = (number as u64 + 1, line);
            self.words = line.split_whitespace();
        }
    }
}
