//! Utility modules

pub mod clock;
pub mod validation;

pub use clock::*;
pub use validation::*;
