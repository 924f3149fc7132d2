//! # Reading and writing of matrices
//!
//! A matrix file starts with the order of the matrix, followed by the values on and above the
//! diagonal, row by row. Conventionally, each row is on its own line:
//!
//! ```text
//! 3
//! 1 2 3
//! 4 5
//! 6
//! ```
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use num_traits::Zero;

use crate::data::linear_algebra::{MAX_MATRIX_SIZE, UpperTriangular};
use crate::io::error::{ImportError, ParseError};
use crate::io::text::ReadText;
use crate::io::tokens::Tokens;

pub mod error;
pub mod text;
pub mod tokens;

/// Import a matrix from a file.
///
/// # Errors
///
/// When the file can't be read, its contents can't be parsed or the order in the header is not
/// valid.
pub fn import<F>(file_path: &Path) -> Result<UpperTriangular<F>, ImportError>
where
    F: Zero + Clone + FromStr,
    F::Err: Display,
{
    debug!("Reading matrix file: \"{}\"", file_path.to_string_lossy());

    let file = File::open(file_path)?;
    read_matrix(file)
}

/// Read a matrix, see `parse_matrix`.
pub fn read_matrix<F, R: Read>(mut reader: R) -> Result<UpperTriangular<F>, ImportError>
where
    F: Zero + Clone + FromStr,
    F::Err: Display,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    parse_matrix(&text)
}

/// Parse a matrix from its header and values.
///
/// The number of values is checked against the order before the matrix is allocated. Values
/// after the last row are ignored.
///
/// # Errors
///
/// When a value can't be parsed, there are too few values or the order is not valid.
pub fn parse_matrix<F>(text: &str) -> Result<UpperTriangular<F>, ImportError>
where
    F: Zero + Clone + FromStr,
    F::Err: Display,
{
    let mut tokens = Tokens::new(text);

    let order = tokens.parse_next::<isize>()
        .map_err(|error| ParseError::with_cause("Failed to read the matrix order", error))?;
    if (0..=MAX_MATRIX_SIZE as isize).contains(&order) {
        let needed = (order * (order + 1) / 2) as usize;
        let available = tokens.clone().take(needed).count();
        if available < needed {
            return Err(ParseError::new(format!(
                "Expected {} values for a matrix of order {}, found {}", needed, order, available,
            )).into());
        }
    }
    let mut matrix = UpperTriangular::new(order)?;
    matrix.read_text(&mut tokens)?;

    if let Some((_, (line_number, _))) = tokens.next() {
        warn!("Ignoring values after the last row, starting at line {}", line_number);
    }
    debug!("Read matrix of order {}", matrix.order());

    Ok(matrix)
}

/// Write a matrix such that it can be read again with `read_matrix`.
///
/// # Errors
///
/// When writing fails.
pub fn write_matrix<F: Display, W: Write>(
    matrix: &UpperTriangular<F>,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", matrix.order())?;
    write!(writer, "{}", matrix)
}
