// Bank Unifier - Core Library
// Exposes the transformation core for the CLI and for tests

pub mod bank;
pub mod cli;
pub mod error;
pub mod logging;
pub mod pipe;
pub mod reader;
pub mod record;
pub mod transform;
pub mod writer;

// Re-export commonly used types
pub use bank::{Bank, UnknownBank};
pub use error::{RowError, UnifyError, ValidationError};
pub use pipe::{pipe, unify, unify_to_csv, InputFile, UnifySummary};
pub use reader::BankReader;
pub use record::{BankRecord, Operation};
pub use transform::{
    get_transformer, BankATransformer, BankBTransformer, BankCTransformer, BankTransformer,
    RawRow,
};
pub use writer::{CsvWriter, RecordSink};
