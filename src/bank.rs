// 🏦 Bank - Source identifier for every supported export format
// Adding a bank = new variant here + new transformer in transform.rs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bank - Which institution an export file comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    BankA,
    BankB,
    BankC,
}

impl Bank {
    /// Every supported bank, in the order shown to users
    pub const ALL: [Bank; 3] = [Bank::BankA, Bank::BankB, Bank::BankC];

    /// Human-readable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Bank::BankA => "bank a",
            Bank::BankB => "bank b",
            Bank::BankC => "bank c",
        }
    }

    /// Identifier accepted on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Bank::BankA => "BankA",
            Bank::BankB => "BankB",
            Bank::BankC => "BankC",
        }
    }

    /// Comma-separated list of every code, for help and error text
    pub fn available_codes() -> String {
        Bank::ALL
            .iter()
            .map(|bank| bank.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bank type: {0}")]
pub struct UnknownBank(pub String);

impl FromStr for Bank {
    type Err = UnknownBank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bank::ALL
            .into_iter()
            .find(|bank| bank.code() == s)
            .ok_or_else(|| UnknownBank(s.to_string()))
    }
}
