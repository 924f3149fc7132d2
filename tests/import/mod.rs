//! # Matrix files
//!
//! Small matrix files, read through the public import function.
use std::path::{Path, PathBuf};

mod test;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of a matrix file by name.
pub(crate) fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}
