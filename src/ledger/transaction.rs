//! Transaction history

use crate::types::*;

/// Append-only record of completed transfers. Insertion order is
/// chronological order.
#[derive(Debug, Default)]
pub struct TransactionManager {
    history: Vec<Transaction>,
}

impl TransactionManager {
    /// Create a new transaction manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed transfer
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.history.push(transaction);
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, transaction_id: &str) -> Option<&Transaction> {
        self.history.iter().find(|txn| txn.id == transaction_id)
    }

    /// Transactions where the owner is sender or receiver, oldest first
    pub fn get_account_transactions(&self, owner: &str) -> Vec<Transaction> {
        self.history
            .iter()
            .filter(|txn| txn.involves(owner))
            .cloned()
            .collect()
    }

    /// The full history
    pub fn get_transactions(&self) -> &[Transaction] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn txn(sender: &str, receiver: &str, amount: i64) -> Transaction {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Transaction::new(
            sender.to_string(),
            receiver.to_string(),
            BigDecimal::from(amount),
            timestamp,
        )
    }

    #[test]
    fn test_owner_history_keeps_insertion_order() {
        let mut manager = TransactionManager::new();
        manager.record_transaction(txn("John", "Jane", 200));
        manager.record_transaction(txn("Jane", "Joe", 10));
        manager.record_transaction(txn("Jane", "John", 300));

        let john = manager.get_account_transactions("John");
        assert_eq!(john.len(), 2);
        assert_eq!(john[0].amount, BigDecimal::from(200));
        assert_eq!(john[1].amount, BigDecimal::from(300));

        assert_eq!(manager.get_account_transactions("Jane").len(), 3);
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_unknown_owner_has_empty_history() {
        let mut manager = TransactionManager::new();
        assert!(manager.get_account_transactions("Ghost").is_empty());

        manager.record_transaction(txn("John", "Jane", 1));
        assert!(manager.get_account_transactions("Ghost").is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let mut manager = TransactionManager::new();
        let record = txn("John", "Jane", 5);
        let id = record.id.clone();
        manager.record_transaction(record);

        assert_eq!(manager.get_transaction(&id).unwrap().receiver, "Jane");
        assert!(manager.get_transaction("missing").is_none());
    }
}
