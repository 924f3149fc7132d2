//! # Command line
//!
//! Runs the `utmatrix` binary on the matrix files of the import tests.
use assert_cmd::Command;

mod test;

fn utmatrix() -> Command {
    Command::new(env!("CARGO_BIN_EXE_utmatrix"))
}
