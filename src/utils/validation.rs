//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount(format!(
            "Amount must be positive, got {}",
            amount
        )))
    } else {
        Ok(())
    }
}

/// Validate that an amount is zero or more
pub fn validate_non_negative_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount(format!(
            "Amount cannot be negative, got {}",
            amount
        )))
    } else {
        Ok(())
    }
}

/// Validate that an owner is among the registered customers
pub fn validate_registered_customer(owner: &str, customers: &[String]) -> LedgerResult<()> {
    if customers.iter().any(|customer| customer == owner) {
        Ok(())
    } else {
        Err(LedgerError::UnknownCustomer(owner.to_string()))
    }
}

/// Account validator that requires the owner to be a registered customer
/// and the opening balance to be non-negative
pub struct RegisteredCustomerValidator;

impl AccountValidator for RegisteredCustomerValidator {
    fn validate_account(&self, account: &Account, customers: &[String]) -> LedgerResult<()> {
        validate_registered_customer(account.owner(), customers)?;
        validate_non_negative_amount(&account.check_balance())
    }
}

/// Transaction validator that rejects zero and negative transfers
pub struct PositiveAmountValidator;

impl TransactionValidator for PositiveAmountValidator {
    fn validate_transfer(
        &self,
        _sender: &str,
        _receiver: &str,
        amount: &BigDecimal,
    ) -> LedgerResult<()> {
        validate_positive_amount(amount)
    }
}
