// Error types for the unifier core

use crate::bank::Bank;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single input row was rejected
#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("time data '{value}' does not match format '{pattern}'")]
    InvalidDate {
        value: String,
        pattern: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("'{0}' is not a valid operation type")]
    UnknownOperation(String),

    #[error("could not convert '{field}' to decimal: '{value}'")]
    InvalidAmount {
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("invalid integer for '{field}': '{value}'")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

/// A row that could not be turned into a `BankRecord`
#[derive(Debug, Error)]
#[error("invalid data for {}: {cause}", .bank.name())]
pub struct ValidationError {
    pub bank: Bank,
    #[source]
    pub cause: RowError,
}

impl ValidationError {
    pub fn new(bank: Bank, cause: RowError) -> Self {
        ValidationError { bank, cause }
    }
}

/// Anything that stops a unify run
#[derive(Debug, Error)]
pub enum UnifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] csv::Error),
}
