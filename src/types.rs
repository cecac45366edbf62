//! Core types and data structures for the bank ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest rate given to savings accounts opened without an explicit rate (5%)
pub fn default_interest_rate() -> BigDecimal {
    BigDecimal::new(5.into(), 2)
}

/// Flat fee charged by checking accounts opened without an explicit fee
pub fn default_transaction_fee() -> BigDecimal {
    BigDecimal::from(2)
}

/// Kind-specific behaviour layered on top of a plain account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Plain account with deposit/withdraw only
    Standard,
    /// Savings account - can report accrued interest
    Savings { interest_rate: BigDecimal },
    /// Checking account - can be charged a flat transaction fee
    Checking { transaction_fee: BigDecimal },
}

/// A single account held by an owner.
///
/// The account is a dumb balance cell: it never refuses a withdrawal.
/// Overdraft prevention belongs to the [`Ledger`](crate::Ledger).
///
/// Owner, id and kind are fixed at construction. The balance only moves
/// through [`deposit`](Account::deposit), [`withdraw`](Account::withdraw)
/// and [`deduct_transaction_fee`](Account::deduct_transaction_fee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    id: String,
    owner: String,
    balance: BigDecimal,
    kind: AccountKind,
}

impl Account {
    /// Create a new account of the given kind
    pub fn new(owner: impl Into<String>, initial_balance: BigDecimal, kind: AccountKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner: owner.into(),
            balance: initial_balance,
            kind,
        }
    }

    /// Create a plain account
    pub fn standard(owner: impl Into<String>, initial_balance: BigDecimal) -> Self {
        Self::new(owner, initial_balance, AccountKind::Standard)
    }

    /// Create a savings account at the default interest rate
    pub fn savings(owner: impl Into<String>, initial_balance: BigDecimal) -> Self {
        Self::savings_with_rate(owner, initial_balance, default_interest_rate())
    }

    /// Create a savings account with an explicit interest rate
    pub fn savings_with_rate(
        owner: impl Into<String>,
        initial_balance: BigDecimal,
        interest_rate: BigDecimal,
    ) -> Self {
        Self::new(owner, initial_balance, AccountKind::Savings { interest_rate })
    }

    /// Create a checking account with the default transaction fee
    pub fn checking(owner: impl Into<String>, initial_balance: BigDecimal) -> Self {
        Self::checking_with_fee(owner, initial_balance, default_transaction_fee())
    }

    /// Create a checking account with an explicit transaction fee
    pub fn checking_with_fee(
        owner: impl Into<String>,
        initial_balance: BigDecimal,
        transaction_fee: BigDecimal,
    ) -> Self {
        Self::new(owner, initial_balance, AccountKind::Checking { transaction_fee })
    }

    /// Unique identifier for the account
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identity of the customer owning the account
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Savings/checking specifics
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Add funds to the account
    pub fn deposit(&mut self, amount: &BigDecimal) {
        self.balance += amount;
    }

    /// Remove funds from the account without any sufficiency check
    pub fn withdraw(&mut self, amount: &BigDecimal) {
        self.balance -= amount;
    }

    /// Current balance
    pub fn check_balance(&self) -> BigDecimal {
        self.balance.clone()
    }
    /// Interest accrued on the current balance, for savings accounts only.
    /// The balance itself is not touched.
    pub fn calculate_interest(&self) -> Option<BigDecimal> {
        match &self.kind {
            AccountKind::Savings { interest_rate } => Some(&self.balance * interest_rate),
            _ => None,
        }
    }

    /// Debit the flat fee of a checking account and return the amount charged.
    /// May drive the balance negative.
    pub fn deduct_transaction_fee(&mut self) -> Option<BigDecimal> {
        let fee = match &self.kind {
            AccountKind::Checking { transaction_fee } => transaction_fee.clone(),
            _ => return None,
        };
        self.withdraw(&fee);
        Some(fee)
    }
}

/// Immutable record of a completed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: String,
    /// Owner of the debited account
    pub sender: String,
    /// Owner of the credited account
    pub receiver: String,
    /// Amount moved
    pub amount: BigDecimal,
    /// When the transfer was executed
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    pub(crate) fn new(
        sender: String,
        receiver: String,
        amount: BigDecimal,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            receiver,
            amount,
            timestamp,
        }
    }

    /// Whether the given owner sent or received this transfer
    pub fn involves(&self, owner: &str) -> bool {
        self.sender == owner || self.receiver == owner
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {} ({})",
            self.sender,
            self.receiver,
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Errors that can occur in the ledger system
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Insufficient funds in account of {owner}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        owner: String,
        balance: BigDecimal,
        requested: BigDecimal,
    },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
