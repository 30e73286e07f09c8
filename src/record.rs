// 📄 Unified Record - The single schema every bank converges to
// Column order here IS the output column order

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// OPERATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Remove,
    Add,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Remove => "remove",
            Operation::Add => "add",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remove" => Ok(Operation::Remove),
            "add" => Ok(Operation::Add),
            other => Err(other.to_string()),
        }
    }
}

// ============================================================================
// BANK RECORD
// ============================================================================

/// Unified bank record
///
/// Built once per valid input row by a transformer, written by a sink, then
/// dropped. Fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRecord {
    timestamp: NaiveDate,
    operation: Operation,
    amount: Decimal,
    from_account: i64,
    to_account: i64,
}

impl BankRecord {
    /// Output column names, in output order
    const FIELDS: [&'static str; 5] = ["timestamp", "type", "amount", "from", "to"];

    /// Amount is normalized so `99.20` and `99.2` build the same record
    pub fn new(
        timestamp: NaiveDate,
        operation: Operation,
        amount: Decimal,
        from_account: i64,
        to_account: i64,
    ) -> Self {
        BankRecord {
            timestamp,
            operation,
            amount: amount.normalize(),
            from_account,
            to_account,
        }
    }

    /// Fields for the unified file
    pub fn fields() -> [&'static str; 5] {
        Self::FIELDS
    }

    /// Ordered `(column, value)` pairs, with `from_account` exposed as `from`
    pub fn to_output_row(&self) -> Vec<(&'static str, String)> {
        let [timestamp, kind, amount, from, to] = Self::FIELDS;
        vec![
            (timestamp, self.timestamp.format("%Y-%m-%d").to_string()),
            (kind, self.operation.to_string()),
            (amount, self.amount.to_string()),
            (from, self.from_account.to_string()),
            (to, self.to_account.to_string()),
        ]
    }

    pub fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn from_account(&self) -> i64 {
        self.from_account
    }

    pub fn to_account(&self) -> i64 {
        self.to_account
    }
}
