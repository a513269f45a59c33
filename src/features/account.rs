use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use rust_decimal::prelude::*;
use thiserror::Error;

/// Caller-supplied identifier used as the sole lookup key.
/// Uniqueness is not enforced; lookups always return the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountNumber(u32);

impl From<u32> for AccountNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(AccountNumber)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("cannot withdraw {requested}, only {available} available in account {number}")]
    InsufficientBalance {
        number: AccountNumber,
        requested: Decimal,
        available: Decimal,
    },

    #[error("no account matches number {0}")]
    NotFound(AccountNumber),
}

pub type AccountResult<T> = anyhow::Result<T, AccountError>;

/// One bank account record.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,

    /// Holder's full name, kept exactly as typed.
    holder: String,

    /// Conventionally "Saving" or "Current"; never validated.
    kind: String,

    balance: Decimal,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        holder: impl Into<String>,
        kind: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            number,
            holder: holder.into(),
            kind: kind.into(),
            balance,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credits the account. The amount is not validated; a negative value
    /// is accepted and debits the balance.
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Debits the account, rejecting any amount above the current balance.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                number: self.number,
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Overwrites holder name and account type. Number and balance are untouched.
    pub fn update(&mut self, holder: impl Into<String>, kind: impl Into<String>) {
        self.holder = holder.into();
        self.kind = kind.into();
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------------------------")?;
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        writeln!(f, "Account Type: {}", self.kind)?;
        writeln!(f, "Balance: {}", self.balance)?;
        write!(f, "-------------------------------------")
    }
}
