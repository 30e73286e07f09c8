// 📥 Bank Reader - Streams one CSV export, one transformed row at a time

use crate::bank::Bank;
use crate::error::{RowError, UnifyError, ValidationError};
use crate::record::BankRecord;
use crate::transform::{get_transformer, BankTransformer, RawRow};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lazy, single-pass reader over one bank export
///
/// Holds a single reusable row buffer, so memory does not grow with file size.
pub struct BankReader<R> {
    reader: csv::Reader<R>,
    transformer: &'static dyn BankTransformer,
    headers: Option<StringRecord>,
    row: StringRecord,
    done: bool,
}

impl<R: Read> BankReader<R> {
    pub fn new(input: R, bank: Bank) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        BankReader {
            reader,
            transformer: get_transformer(bank),
            headers: None,
            row: StringRecord::new(),
            done: false,
        }
    }

    pub fn bank(&self) -> Bank {
        self.transformer.bank()
    }

    fn fail(&mut self, cause: RowError) -> Option<Result<BankRecord, ValidationError>> {
        self.done = true;
        Some(Err(ValidationError::new(self.bank(), cause)))
    }
}

impl BankReader<File> {
    pub fn from_path(path: &Path, bank: Bank) -> Result<Self, UnifyError> {
        let file = File::open(path).map_err(|source| UnifyError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(BankReader::new(file, bank))
    }
}

impl<R: Read> Iterator for BankReader<R> {
    type Item = Result<BankRecord, ValidationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.headers.is_none() {
            match self.reader.headers().cloned() {
                Ok(headers) => self.headers = Some(headers),
                Err(err) => return self.fail(err.into()),
            }
        }

        match self.reader.read_record(&mut self.row) {
            Ok(true) => {}
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(err) => return self.fail(err.into()),
        }

        let headers = self.headers.as_ref()?;
        let raw: RawRow = headers
            .iter()
            .zip(self.row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        let result = self.transformer.transform(&raw);
        if let Err(err) = &result {
            self.done = true;
            tracing::debug!(
                bank = %self.bank(),
                line = self.row.position().map(|p| p.line()),
                error = %err,
                "rejected row"
            );
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_in_order() {
        let data = "timestamp,type,amount,from,to\r\n\
                    Oct 1 2019,remove,99.20,198,182\r\n\
                    Oct 2 2019,add,2000.10,188,198\r\n";

        let records: Vec<_> = BankReader::new(data.as_bytes(), Bank::BankA)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to_output_row()[0].1, "2019-10-01");
        assert_eq!(records[1].to_output_row()[2].1, "2000.1");
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let data = "date,transaction,amounts,from,to\n";
        assert_eq!(BankReader::new(data.as_bytes(), Bank::BankB).count(), 0);
    }

    #[test]
    fn test_short_row_is_missing_field() {
        let data = "timestamp,type,amount,from,to\nOct 1 2019,remove,99.20,198\n";
        let mut reader = BankReader::new(data.as_bytes(), Bank::BankA);

        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err.cause, RowError::MissingField("to")));
    }

    #[test]
    fn test_stops_after_first_error() {
        let data = "timestamp,type,amount,from,to\n\
                    Oct 1 2019,oops,1,1,2\n\
                    Oct 2 2019,add,1,1,2\n";
        let mut reader = BankReader::new(data.as_bytes(), Bank::BankA);

        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = BankReader::from_path(Path::new("no/such/file.csv"), Bank::BankC);
        assert!(matches!(result, Err(UnifyError::Open { .. })));
    }
}
