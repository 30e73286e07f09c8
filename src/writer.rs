// 📤 Writers - Where unified records end up

use crate::record::BankRecord;
use csv::{Terminator, WriterBuilder};
use std::io::Write;

/// RecordSink - Accepts unified records one at a time
pub trait RecordSink {
    fn write(&mut self, record: &BankRecord) -> Result<(), csv::Error>;
}

/// In-memory sink; keeps every record it receives
impl RecordSink for Vec<BankRecord> {
    fn write(&mut self, record: &BankRecord) -> Result<(), csv::Error> {
        self.push(record.clone());
        Ok(())
    }
}

/// CSV sink for the unified file
///
/// The header is written on construction, so it appears exactly once and
/// always first. Every line ends with `\r\n`. Flushing and closing the
/// underlying stream stay with the caller.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(output: W) -> Result<Self, csv::Error> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(output);

        writer.write_record(BankRecord::fields())?;

        Ok(CsvWriter { writer })
    }

    pub fn flush(&mut self) -> Result<(), csv::Error> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> Result<W, csv::Error> {
        self.writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))
    }
}

impl<W: Write> RecordSink for CsvWriter<W> {
    fn write(&mut self, record: &BankRecord) -> Result<(), csv::Error> {
        self.writer
            .write_record(record.to_output_row().iter().map(|(_, value)| value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Operation;
    use crate::transform::{BankCTransformer, BankTransformer, RawRow};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record() -> BankRecord {
        BankRecord::new(
            NaiveDate::from_ymd_opt(2019, 10, 1).unwrap(),
            Operation::Remove,
            dec!(3.04),
            1,
            2,
        )
    }

    fn written(writer: CsvWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_writer() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        writer.write(&record()).unwrap();

        assert_eq!(
            written(writer),
            "timestamp,type,amount,from,to\r\n2019-10-01,remove,3.04,1,2\r\n"
        );
    }

    #[test]
    fn test_header_written_without_records() {
        let writer = CsvWriter::new(Vec::new()).unwrap();
        assert_eq!(written(writer), "timestamp,type,amount,from,to\r\n");
    }

    #[test]
    fn test_header_written_once() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        for _ in 0..5 {
            writer.write(&record()).unwrap();
        }

        let output = written(writer);
        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(lines[0], "timestamp,type,amount,from,to");
        assert_eq!(lines.iter().filter(|l| l.starts_with("timestamp")).count(), 1);
        assert_eq!(lines.len(), 7); // header + 5 rows + trailing empty
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_written_row_reads_back() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        writer.write(&record()).unwrap();
        let output = written(writer);

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let row = reader.records().next().unwrap().unwrap();

        let get = |name: &str| {
            let idx = headers.iter().position(|h| h == name).unwrap();
            row.get(idx).unwrap().to_string()
        };

        assert_eq!(NaiveDate::parse_from_str(&get("timestamp"), "%Y-%m-%d").unwrap(), record().timestamp());
        assert_eq!(get("type"), "remove");
        assert_eq!(get("amount").parse::<rust_decimal::Decimal>().unwrap(), record().amount());
        assert_eq!(get("from").parse::<i64>().unwrap(), 1);
        assert_eq!(get("to").parse::<i64>().unwrap(), 2);
    }

    #[test]
    fn test_bank_c_row_written_exactly() {
        let raw: RawRow = [
            ("euro", "99"),
            ("cents", "40"),
            ("date_readable", "1 Oct 2019"),
            ("type", "add"),
            ("from", "188"),
            ("to", "198"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let record = BankCTransformer.transform(&raw).unwrap();
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        writer.write(&record).unwrap();

        assert_eq!(
            written(writer),
            "timestamp,type,amount,from,to\r\n2019-10-01,add,99.4,188,198\r\n"
        );
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<BankRecord> = Vec::new();
        sink.write(&record()).unwrap();
        assert_eq!(sink, vec![record()]);
    }
}
