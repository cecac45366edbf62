//! Main ledger orchestrator that coordinates accounts and transfers

use bigdecimal::BigDecimal;

use crate::config::LedgerConfig;
use crate::ledger::{AccountManager, TransactionManager};
use crate::traits::*;
use crate::types::*;
use crate::utils::{PositiveAmountValidator, RegisteredCustomerValidator, SystemClock};

/// A bank: its customers, their accounts and the history of transfers
/// between them
pub struct Ledger {
    name: String,
    account_manager: AccountManager,
    transaction_manager: TransactionManager,
    transaction_validator: Box<dyn TransactionValidator>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create a new ledger with permissive validation and the system clock
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_validators(
            name,
            Box::new(DefaultAccountValidator),
            Box::new(DefaultTransactionValidator),
        )
    }

    /// Create a new ledger with custom validators
    pub fn with_validators(
        name: impl Into<String>,
        account_validator: Box<dyn AccountValidator>,
        transaction_validator: Box<dyn TransactionValidator>,
    ) -> Self {
        Self {
            name: name.into(),
            account_manager: AccountManager::with_validator(account_validator),
            transaction_manager: TransactionManager::new(),
            transaction_validator,
            clock: Box::new(SystemClock),
        }
    }

    /// Create a ledger whose validation rules follow the config flags
    pub fn from_config(config: &LedgerConfig) -> Self {
        let account_validator: Box<dyn AccountValidator> = if config.require_registered_customers
        {
            Box::new(RegisteredCustomerValidator)
        } else {
            Box::new(DefaultAccountValidator)
        };
        let transaction_validator: Box<dyn TransactionValidator> =
            if config.require_positive_amounts {
                Box::new(PositiveAmountValidator)
            } else {
                Box::new(DefaultTransactionValidator)
            };

        Self::with_validators(config.name.clone(), account_validator, transaction_validator)
    }

    /// Replace the clock used to stamp transaction records
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Customer and account operations
    /// Register a customer identity
    pub fn add_customer(&mut self, identity: impl Into<String>) {
        self.account_manager.add_customer(identity.into());
    }

    /// Register an account, returning its id
    pub fn add_account(&mut self, account: Account) -> LedgerResult<String> {
        self.account_manager.add_account(account)
    }

    pub fn customers(&self) -> &[String] {
        self.account_manager.customers()
    }

    pub fn accounts(&self) -> &[Account] {
        self.account_manager.accounts()
    }

    /// Get an account by ID
    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.account_manager.get_account(account_id)
    }

    /// Get a mutable account by ID, e.g. to charge a checking fee
    pub fn account_mut(&mut self, account_id: &str) -> Option<&mut Account> {
        self.account_manager.get_account_mut(account_id)
    }

    /// The account transfers for this owner go through
    pub fn find_account(&self, owner: &str) -> Option<&Account> {
        self.account_manager.find_by_owner(owner)
    }

    /// All accounts held by the owner, in registration order
    pub fn accounts_for(&self, owner: &str) -> Vec<&Account> {
        self.account_manager.accounts_for(owner)
    }

    /// Balance of the owner's first account
    pub fn balance_of(&self, owner: &str) -> LedgerResult<BigDecimal> {
        self.find_account(owner)
            .map(Account::check_balance)
            .ok_or_else(|| LedgerError::AccountNotFound(owner.to_string()))
    }

    // Transaction operations
    /// Move `amount` from the sender's first account to the receiver's first
    /// account and record the transfer.
    ///
    /// Every check runs before any balance is touched, so a rejected
    /// transfer leaves both accounts and the history unchanged.
    pub fn perform_transaction(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: BigDecimal,
    ) -> LedgerResult<Transaction> {
        match self.try_transfer(sender, receiver, amount) {
            Ok(transaction) => {
                log::info!(
                    "{}: transferred {} from {} to {}",
                    self.name,
                    transaction.amount,
                    transaction.sender,
                    transaction.receiver
                );
                Ok(transaction)
            }
            Err(err) => {
                log::warn!("{}: rejected transfer {} -> {}: {}", self.name, sender, receiver, err);
                Err(err)
            }
        }
    }

    fn try_transfer(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: BigDecimal,
    ) -> LedgerResult<Transaction> {
        self.transaction_validator
            .validate_transfer(sender, receiver, &amount)?;

        let from = self.account_manager.position_of(sender)?;
        let to = self.account_manager.position_of(receiver)?;

        let sender_account = self.account_manager.at(from);
        if sender_account.check_balance() < amount {
            return Err(LedgerError::InsufficientFunds {
                owner: sender_account.owner().to_string(),
                balance: sender_account.check_balance(),
                requested: amount,
            });
        }

        self.account_manager.transfer(from, to, &amount);

        let transaction = Transaction::new(
            self.account_manager.at(from).owner().to_string(),
            self.account_manager.at(to).owner().to_string(),
            amount,
            self.clock.now(),
        );
        self.transaction_manager
            .record_transaction(transaction.clone());

        Ok(transaction)
    }

    /// Every transfer the owner sent or received, oldest first
    pub fn get_transactions(&self, owner: &str) -> Vec<Transaction> {
        self.transaction_manager.get_account_transactions(owner)
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, transaction_id: &str) -> Option<&Transaction> {
        self.transaction_manager.get_transaction(transaction_id)
    }

    /// The full transfer history
    pub fn all_transactions(&self) -> &[Transaction] {
        self.transaction_manager.get_transactions()
    }
}
