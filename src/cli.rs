// 🖥️ Command line - argument parsing and input checks
// Everything here runs before the core sees a single row.

use crate::bank::{Bank, UnknownBank};
use crate::pipe::InputFile;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(
    name = "bank-unifier",
    about = "Merge bank transaction exports into one unified CSV",
    after_help = format!("Available bank types: {}", Bank::available_codes())
)]
pub struct Cli {
    /// Pairs of bank type and file name, e.g. `BankA data/bank1.csv`
    #[arg(value_name = "BANK_TYPE FILENAME", num_args = 1.., required = true)]
    pub files: Vec<String>,

    /// Output file
    #[arg(short = 'o', value_name = "FILENAME", default_value = "output.csv")]
    pub output: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("files arg should be pairs of values")]
    UnpairedFiles,

    #[error("path {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("path {} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error(transparent)]
    UnknownBank(#[from] UnknownBank),
}

/// Turn `BANK_TYPE FILENAME ...` into checked input files, in order
pub fn resolve_inputs(args: &[String]) -> Result<Vec<InputFile>, ArgsError> {
    if args.len() % 2 != 0 {
        return Err(ArgsError::UnpairedFiles);
    }

    args.chunks_exact(2)
        .map(|pair| {
            let path = PathBuf::from(&pair[1]);
            if !path.exists() {
                return Err(ArgsError::PathNotFound(path));
            }
            if !path.is_file() {
                return Err(ArgsError::NotAFile(path));
            }

            let bank = pair[0].parse::<Bank>()?;
            Ok(InputFile::new(path, bank))
        })
        .collect()
}
