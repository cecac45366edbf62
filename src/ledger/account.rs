//! Customer and account registry

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Account manager owning the customer list and the accounts, in
/// registration order
pub struct AccountManager {
    customers: Vec<String>,
    accounts: Vec<Account>,
    validator: Box<dyn AccountValidator>,
}

impl AccountManager {
    /// Create a new account manager
    pub fn new() -> Self {
        Self::with_validator(Box::new(DefaultAccountValidator))
    }

    /// Create a new account manager with custom validator
    pub fn with_validator(validator: Box<dyn AccountValidator>) -> Self {
        Self {
            customers: Vec::new(),
            accounts: Vec::new(),
            validator,
        }
    }

    /// Register a customer. Duplicates are kept.
    pub fn add_customer(&mut self, identity: String) {
        log::debug!("registering customer {}", identity);
        self.customers.push(identity);
    }

    /// Register an account and return its id
    pub fn add_account(&mut self, account: Account) -> LedgerResult<String> {
        self.validator.validate_account(&account, &self.customers)?;

        log::debug!(
            "registering {:?} account {} for {}",
            account.kind(),
            account.id(),
            account.owner()
        );
        let id = account.id().to_string();
        self.accounts.push(account);
        Ok(id)
    }

    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Get an account by ID
    pub fn get_account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == account_id)
    }

    /// Get a mutable account by ID
    pub fn get_account_mut(&mut self, account_id: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.id() == account_id)
    }

    /// First account registered for the owner
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Every account registered for the owner
    pub fn accounts_for(&self, owner: &str) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.owner() == owner)
            .collect()
    }

    /// Position of the first account registered for the owner
    pub(crate) fn position_of(&self, owner: &str) -> LedgerResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.owner() == owner)
            .ok_or_else(|| LedgerError::AccountNotFound(owner.to_string()))
    }

    pub(crate) fn at(&self, index: usize) -> &Account {
        &self.accounts[index]
    }

    /// Move funds between the accounts at the two positions.
    ///
    /// Withdraw and deposit happen back to back with nothing in between that
    /// can fail. Both positions may be the same account.
    pub(crate) fn transfer(&mut self, from: usize, to: usize, amount: &BigDecimal) {
        self.accounts[from].withdraw(amount);
        self.accounts[to].deposit(amount);
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::RegisteredCustomerValidator;

    #[test]
    fn test_duplicate_customers_are_kept() {
        let mut manager = AccountManager::new();
        manager.add_customer("John".to_string());
        manager.add_customer("John".to_string());
        assert_eq!(manager.customers(), ["John".to_string(), "John".to_string()]);
    }

    #[test]
    fn test_default_validator_accepts_unknown_owner() {
        let mut manager = AccountManager::new();
        let id = manager
            .add_account(Account::savings("Nobody", BigDecimal::from(10)))
            .unwrap();
        assert_eq!(manager.get_account(&id).unwrap().owner(), "Nobody");
    }

    #[test]
    fn test_strict_validator_rejects_unknown_owner() {
        let mut manager = AccountManager::with_validator(Box::new(RegisteredCustomerValidator));
        let result = manager.add_account(Account::savings("Nobody", BigDecimal::from(10)));

        assert_eq!(result, Err(LedgerError::UnknownCustomer("Nobody".to_string())));
        assert!(manager.accounts().is_empty());
    }

    #[test]
    fn test_first_registered_account_wins() {
        let mut manager = AccountManager::new();
        let savings = manager
            .add_account(Account::savings("John", BigDecimal::from(1000)))
            .unwrap();
        manager
            .add_account(Account::checking("John", BigDecimal::from(500)))
            .unwrap();

        assert_eq!(manager.find_by_owner("John").unwrap().id(), savings);
        assert_eq!(manager.position_of("John").unwrap(), 0);
        assert_eq!(manager.accounts_for("John").len(), 2);
        assert!(manager.accounts_for("Jane").is_empty());
        assert_eq!(
            manager.position_of("Jane"),
            Err(LedgerError::AccountNotFound("Jane".to_string()))
        );
    }

    #[test]
    fn test_transfer_to_same_position_is_neutral() {
        let mut manager = AccountManager::new();
        manager
            .add_account(Account::standard("John", BigDecimal::from(100)))
            .unwrap();

        manager.transfer(0, 0, &BigDecimal::from(40));
        assert_eq!(manager.at(0).check_balance(), BigDecimal::from(100));
    }
}
