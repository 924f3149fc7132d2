//! # Error reporting for reading of vectors and matrices
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::linear_algebra;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the input could not be parsed into numbers.
    Parse(ParseError),
    /// The input describes a shape that can't be constructed.
    ///
    /// For example, the header may specify a matrix order that is too large.
    LinearAlgebra(linear_algebra::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => fmt::Display::fmt(error, f),
            ImportError::Parse(error) => fmt::Display::fmt(error, f),
            ImportError::LinearAlgebra(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => error.source(),
            ImportError::Parse(error) => error.source(),
            ImportError::LinearAlgebra(_) => None,
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<linear_algebra::Error> for ImportError {
    fn from(error: linear_algebra::Error) -> Self {
        ImportError::LinearAlgebra(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum ParseErrorSource {
    FileLocation(u64, String),
    Nested(Box<ParseError>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

/// The nested errors are part of the `Display` output, so they are not exposed as a source.
impl Error for ParseError {}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None, }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Line number at which the innermost error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, _)) => Some(*line_number),
            Some(ParseErrorSource::Nested(error)) => error.line_number(),
            None => None,
        }
    }

    /// Get all descriptions in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some(ref source) = self.source {
            match source {
                ParseErrorSource::FileLocation(line_number, line) => {
                    descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
                }
                ParseErrorSource::Nested(error) => {
                    descriptions.append(&mut error.chain_description());
                }
            }
        }

        descriptions
    }
}

/// A `FileLocation` references a line in the input by its line number, counting from one. It
/// contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);
