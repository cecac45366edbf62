//! Traits for injectable time and pluggable validation rules

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

use crate::types::*;

/// Source of timestamps for transaction records
///
/// Injected into the ledger so tests can stamp records deterministically
/// instead of reading the system clock.
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> NaiveDateTime;
}

/// Trait for implementing custom account registration rules
pub trait AccountValidator: Send + Sync {
    /// Validate an account before it is added to the ledger
    fn validate_account(&self, account: &Account, customers: &[String]) -> LedgerResult<()>;
}

/// Trait for implementing custom transfer rules
pub trait TransactionValidator: Send + Sync {
    /// Validate a transfer request before any account is looked up
    fn validate_transfer(
        &self,
        sender: &str,
        receiver: &str,
        amount: &BigDecimal,
    ) -> LedgerResult<()>;
}

/// Default account validator: accepts every account, including unknown
/// owners and duplicates
pub struct DefaultAccountValidator;

impl AccountValidator for DefaultAccountValidator {
    fn validate_account(&self, _account: &Account, _customers: &[String]) -> LedgerResult<()> {
        Ok(())
    }
}

/// Default transaction validator: accepts any amount
pub struct DefaultTransactionValidator;

impl TransactionValidator for DefaultTransactionValidator {
    fn validate_transfer(
        &self,
        _sender: &str,
        _receiver: &str,
        _amount: &BigDecimal,
    ) -> LedgerResult<()> {
        Ok(())
    }
}
