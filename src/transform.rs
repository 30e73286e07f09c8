// 🏗️ Transformer Framework
// One transformer per bank: raw CSV row → BankRecord

use crate::bank::Bank;
use crate::error::{RowError, ValidationError};
use crate::record::{BankRecord, Operation};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// One input row: header name → cell text
pub type RawRow = HashMap<String, String>;

// ============================================================================
// CORE TRAIT
// ============================================================================

/// BankTransformer - Validate and transform one bank's row to the unified record
///
/// Adding a bank: implement this trait, add a `Bank` variant, add the
/// `get_transformer` arm. Nothing else changes.
pub trait BankTransformer: Send + Sync {
    /// The bank whose format this transformer understands
    fn bank(&self) -> Bank;

    /// Parse every field of `raw`, failing on the first bad one
    fn convert(&self, raw: &RawRow) -> Result<BankRecord, RowError>;

    /// Same as `convert`, with the failure tagged with this bank
    fn transform(&self, raw: &RawRow) -> Result<BankRecord, ValidationError> {
        self.convert(raw)
            .map_err(|cause| ValidationError::new(self.bank(), cause))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

static BANK_A: BankATransformer = BankATransformer;
static BANK_B: BankBTransformer = BankBTransformer;
static BANK_C: BankCTransformer = BankCTransformer;

/// Choose transformer by bank
pub fn get_transformer(bank: Bank) -> &'static dyn BankTransformer {
    match bank {
        Bank::BankA => &BANK_A,
        Bank::BankB => &BANK_B,
        Bank::BankC => &BANK_C,
    }
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn field<'a>(raw: &'a RawRow, name: &'static str) -> Result<&'a str, RowError> {
    raw.get(name)
        .map(String::as_str)
        .ok_or(RowError::MissingField(name))
}

fn parse_date(raw: &RawRow, name: &'static str, format: &'static str) -> Result<NaiveDate, RowError> {
    let value = field(raw, name)?;
    let invalid = |source| RowError::InvalidDate {
        value: value.to_string(),
        pattern: format,
        source,
    };

    let date = NaiveDate::parse_from_str(value, format).map_err(|err| invalid(Some(err)))?;

    // chrono's %Y also takes 1-3 digit years; exports always carry four
    if format.ends_with("%Y") && !has_four_digit_year(value) {
        return Err(invalid(None));
    }

    Ok(date)
}

fn has_four_digit_year(value: &str) -> bool {
    let year = value.rsplit([' ', '-']).next().unwrap_or_default();
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

fn parse_operation(raw: &RawRow, name: &'static str) -> Result<Operation, RowError> {
    field(raw, name)?
        .parse::<Operation>()
        .map_err(RowError::UnknownOperation)
}

fn parse_decimal(raw: &RawRow, name: &'static str) -> Result<Decimal, RowError> {
    let value = field(raw, name)?;
    Decimal::from_str(value.trim()).map_err(|source| RowError::InvalidAmount {
        field: name,
        value: value.to_string(),
        source,
    })
}

fn parse_int(raw: &RawRow, name: &'static str) -> Result<i64, RowError> {
    let value = field(raw, name)?;
    value.trim().parse::<i64>().map_err(|source| RowError::InvalidInteger {
        field: name,
        value: value.to_string(),
        source,
    })
}

// ============================================================================
// TRANSFORMERS
// ============================================================================

/// Bank A: `timestamp,type,amount,from,to`, dates like `Oct 1 2019`
#[derive(Debug, Default)]
pub struct BankATransformer;

impl BankTransformer for BankATransformer {
    fn bank(&self) -> Bank {
        Bank::BankA
    }

    fn convert(&self, raw: &RawRow) -> Result<BankRecord, RowError> {
        Ok(BankRecord::new(
            parse_date(raw, "timestamp", "%b %d %Y")?,
            parse_operation(raw, "type")?,
            parse_decimal(raw, "amount")?,
            parse_int(raw, "from")?,
            parse_int(raw, "to")?,
        ))
    }
}

/// Bank B: `date,transaction,amounts,from,to`, dates like `01-10-2019`
#[derive(Debug, Default)]
pub struct BankBTransformer;

impl BankTransformer for BankBTransformer {
    fn bank(&self) -> Bank {
        Bank::BankB
    }

    fn convert(&self, raw: &RawRow) -> Result<BankRecord, RowError> {
        Ok(BankRecord::new(
            parse_date(raw, "date", "%d-%m-%Y")?,
            parse_operation(raw, "transaction")?,
            parse_decimal(raw, "amounts")?,
            parse_int(raw, "from")?,
            parse_int(raw, "to")?,
        ))
    }
}

/// Bank C: `date_readable,type,euro,cents,from,to`, dates like `1 Oct 2019`
///
/// Amount is split in two integer columns; recombined exactly as
/// `euro + cents / 100`.
#[derive(Debug, Default)]
pub struct BankCTransformer;

impl BankTransformer for BankCTransformer {
    fn bank(&self) -> Bank {
        Bank::BankC
    }

    fn convert(&self, raw: &RawRow) -> Result<BankRecord, RowError> {
        let timestamp = parse_date(raw, "date_readable", "%d %b %Y")?;
        let operation = parse_operation(raw, "type")?;
        let euro = parse_int(raw, "euro")?;
        let cents = parse_int(raw, "cents")?;
        let amount = Decimal::from(euro) + Decimal::new(cents, 2);

        Ok(BankRecord::new(
            timestamp,
            operation,
            amount,
            parse_int(raw, "from")?,
            parse_int(raw, "to")?,
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
