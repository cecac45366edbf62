//! Ledger module containing account registration and transfer processing

pub mod account;
pub mod core;
pub mod transaction;

pub use self::account::*;
pub use self::core::*;
pub use self::transaction::*;
