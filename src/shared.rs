//! Thread-safe handle around a single ledger

use bigdecimal::BigDecimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ledger::Ledger;
use crate::types::*;

/// Cloneable handle sharing one [`Ledger`] between threads.
///
/// All operations go through one lock, so the lookup, funds check and
/// balance update of a transfer are never interleaved with another transfer.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // A panic while holding the lock cannot leave a transfer half applied,
    // so a poisoned ledger is still consistent.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_customer(&self, identity: impl Into<String>) {
        self.lock().add_customer(identity);
    }

    pub fn add_account(&self, account: Account) -> LedgerResult<String> {
        self.lock().add_account(account)
    }

    pub fn perform_transaction(
        &self,
        sender: &str,
        receiver: &str,
        amount: BigDecimal,
    ) -> LedgerResult<Transaction> {
        self.lock().perform_transaction(sender, receiver, amount)
    }

    pub fn get_transactions(&self, owner: &str) -> Vec<Transaction> {
        self.lock().get_transactions(owner)
    }

    pub fn balance_of(&self, owner: &str) -> LedgerResult<BigDecimal> {
        self.lock().balance_of(owner)
    }

    /// Read the ledger while holding the lock
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_transfers_conserve_funds() {
        let shared = SharedLedger::new(Ledger::new("ABC Bank"));
        shared
            .add_account(Account::standard("John", BigDecimal::from(1000)))
            .unwrap();
        shared
            .add_account(Account::standard("Jane", BigDecimal::from(1000)))
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let (from, to) = if i % 2 == 0 { ("John", "Jane") } else { ("Jane", "John") };
                    for _ in 0..50 {
                        let _ = shared.perform_transaction(from, to, BigDecimal::from(7));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let john = shared.balance_of("John").unwrap();
        let jane = shared.balance_of("Jane").unwrap();
        assert_eq!(john.clone() + jane.clone(), BigDecimal::from(2000));
        assert!(john >= BigDecimal::from(0));
        assert!(jane >= BigDecimal::from(0));

        let recorded = shared.with_ledger(|ledger| ledger.all_transactions().len());
        assert_eq!(shared.get_transactions("John").len(), recorded);
    }

    #[test]
    fn test_overdraft_never_happens_under_contention() {
        let shared = SharedLedger::new(Ledger::new("ABC Bank"));
        shared
            .add_account(Account::standard("John", BigDecimal::from(100)))
            .unwrap();
        shared
            .add_account(Account::standard("Jane", BigDecimal::from(0)))
            .unwrap();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .perform_transaction("John", "Jane", BigDecimal::from(30))
                        .is_ok()
                })
            })
            .collect();
        let succeeded = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(succeeded, 3);
        assert_eq!(shared.balance_of("John").unwrap(), BigDecimal::from(10));
        assert_eq!(shared.balance_of("Jane").unwrap(), BigDecimal::from(90));
    }
}
