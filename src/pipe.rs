// 🔀 Pipe - Moves records from readers to one shared sink, fail-fast

use crate::bank::Bank;
use crate::error::UnifyError;
use crate::reader::BankReader;
use crate::writer::{CsvWriter, RecordSink};
use std::io::{Read, Write};
use std::path::PathBuf;

/// One input file and the bank format it uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub bank: Bank,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, bank: Bank) -> Self {
        InputFile {
            path: path.into(),
            bank,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnifySummary {
    pub files: usize,
    pub records: usize,
}

/// Send records from reader to sink
///
/// Each record is written before the next row is read. The first invalid
/// row stops the pipe; rows after it are never read. Returns how many
/// records were written.
pub fn pipe<R, S>(reader: BankReader<R>, sink: &mut S) -> Result<usize, UnifyError>
where
    R: Read,
    S: RecordSink + ?Sized,
{
    let mut written = 0;
    for record in reader {
        sink.write(&record?)?;
        written += 1;
    }
    Ok(written)
}

/// Pipe every input, in order, into one sink
///
/// Stops at the first error; whatever was written before it stays in the sink.
pub fn unify<S>(inputs: &[InputFile], sink: &mut S) -> Result<UnifySummary, UnifyError>
where
    S: RecordSink + ?Sized,
{
    let mut summary = UnifySummary::default();

    for input in inputs {
        tracing::debug!(path = %input.path.display(), bank = %input.bank, "opening input");

        let reader = BankReader::from_path(&input.path, input.bank)?;
        let count = pipe(reader, sink)?;

        tracing::info!(
            path = %input.path.display(),
            bank = %input.bank,
            records = count,
            "input unified"
        );

        summary.files += 1;
        summary.records += count;
    }

    Ok(summary)
}

/// `unify` into a CSV writer, flushing it whatever the outcome
///
/// A run error is always the one returned; a flush failure after it is only
/// logged. Rows written before the error reach the underlying stream.
pub fn unify_to_csv<W: Write>(
    inputs: &[InputFile],
    writer: &mut CsvWriter<W>,
) -> Result<UnifySummary, UnifyError> {
    let result = unify(inputs, writer);
    let flushed = writer.flush();

    match result {
        Ok(summary) => {
            flushed?;
            Ok(summary)
        }
        Err(err) => {
            if let Err(flush_err) = flushed {
                tracing::warn!(error = %flush_err, "failed to flush output after error");
            }
            Err(err)
        }
    }
}
