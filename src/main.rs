use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use bank_unifier::cli::{resolve_inputs, Cli};
use bank_unifier::{logging, unify_to_csv, CsvWriter, UnifyError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let inputs = match resolve_inputs(&cli.files) {
        Ok(inputs) => inputs,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("failed to initialise logging: {err}");
    }

    match run(&cli, &inputs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Validation failures print as a single bare line
            match err.downcast_ref::<UnifyError>() {
                Some(unify_err) => eprintln!("{unify_err}"),
                None => eprintln!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, inputs: &[bank_unifier::InputFile]) -> Result<()> {
    let output = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file: {}", cli.output.display()))?;

    let mut writer = CsvWriter::new(BufWriter::new(output))?;

    // Flushes either way; rows written before a failure stay in the file
    let summary = unify_to_csv(inputs, &mut writer)?;
    tracing::info!(
        files = summary.files,
        records = summary.records,
        output = %cli.output.display(),
        "done"
    );

    Ok(())
}
