//! # Bank Ledger
//!
//! An in-memory bank ledger: customers, their accounts, and transfers
//! between accounts with a queryable transaction history.
//!
//! ## Features
//!
//! - **Accounts**: plain, savings (interest calculation) and checking (flat fee)
//! - **Transfers**: overdraft-checked, all-or-nothing moves between owners
//! - **History**: append-only transaction records, queryable by owner
//! - **Pluggable validation**: permissive by default, strict validators on demand
//! - **Injectable clock**: deterministic timestamps for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use bank_ledger::{Account, Ledger};
//! use bigdecimal::BigDecimal;
//!
//! let mut bank = Ledger::new("ABC Bank");
//! bank.add_customer("John Doe");
//! bank.add_customer("Jane Smith");
//! bank.add_account(Account::savings("John Doe", BigDecimal::from(1000))).unwrap();
//! bank.add_account(Account::savings("Jane Smith", BigDecimal::from(2000))).unwrap();
//!
//! bank.perform_transaction("John Doe", "Jane Smith", BigDecimal::from(200)).unwrap();
//! assert_eq!(bank.balance_of("John Doe").unwrap(), BigDecimal::from(800));
//! assert_eq!(bank.get_transactions("John Doe").len(), 1);
//! ```

pub mod config;
pub mod ledger;
pub mod shared;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::LedgerConfig;
pub use ledger::*;
pub use shared::SharedLedger;
pub use traits::*;
pub use types::*;
