use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

use utmatrix::data::linear_algebra::{Element, UpperTriangular};
use utmatrix::io::{import, write_matrix};

/// Arithmetic on upper triangular matrices stored in text files.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// What to do with the matrices
    #[arg(value_enum)]
    operation: Operation,
    /// File containing the first matrix
    left: PathBuf,
    /// File containing the second matrix, needed for `add` and `sub`
    right: Option<PathBuf>,
    /// Read the values as floating point numbers instead of integers
    #[arg(long)]
    float: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Operation {
    /// Read a matrix and write it back
    Print,
    /// Sum of two matrices
    Add,
    /// Difference of two matrices
    Sub,
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("UTMATRIX_LOG", "warn"))
        .init();

    let opts = Opts::parse();

    let result = if opts.float {
        run::<f64>(&opts)
    } else {
        run::<i64>(&opts)
    };

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        exit(1);
    }
}

fn run<F>(opts: &Opts) -> Result<()>
where
    F: Element + FromStr,
    F::Err: Display,
{
    let left = read::<F>(&opts.left)?;

    let result = match opts.operation {
        Operation::Print => left,
        Operation::Add | Operation::Sub => {
            let Some(right_path) = &opts.right else {
                bail!("Operation {:?} needs a second matrix", opts.operation);
            };
            let right = read::<F>(right_path)?;

            info!(
                "Computing {:?} of matrices of order {} and {}",
                opts.operation, left.order(), right.order(),
            );
            let combined = match opts.operation {
                Operation::Add => left.add(&right),
                _ => left.sub(&right),
            };
            combined.context("Couldn't combine the matrices")?
        },
    };

    write_matrix(&result, io::stdout().lock()).context("Couldn't write the result")
}

fn read<F>(path: &Path) -> Result<UpperTriangular<F>>
where
    F: Element + FromStr,
    F::Err: Display,
{
    info!("Reading matrix file: \"{}\"...", path.to_string_lossy());

    import(path).with_context(|| format!("Couldn't read matrix file \"{}\"", path.to_string_lossy()))
}
