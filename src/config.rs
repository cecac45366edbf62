//! Construction-time configuration for a ledger

use serde::{Deserialize, Serialize};

/// Settings fixed when a [`Ledger`](crate::Ledger) is created.
///
/// Both checks are off by default, which accepts unknown account owners and
/// any transfer amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Bank name
    pub name: String,
    /// Reject accounts whose owner was never added as a customer
    #[serde(default)]
    pub require_registered_customers: bool,
    /// Reject zero and negative transfer amounts
    #[serde(default)]
    pub require_positive_amounts: bool,
}

impl LedgerConfig {
    /// Permissive config for the named bank
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            require_registered_customers: false,
            require_positive_amounts: false,
        }
    }

    /// Config with every check enabled
    pub fn strict(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            require_registered_customers: true,
            require_positive_amounts: true,
        }
    }
}
