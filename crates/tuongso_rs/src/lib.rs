//! Convenience wrapper for the tuongso numerology engine.
//!
//! Provides process-wide interpretation tables and high-level functions
//! that accept plain day/month/year or date text, validate them, and
//! return a full [`CalculationResult`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tuongso_rs::*;
//!
//! let result = calculate(15, 6, 1990).expect("valid past date");
//! assert_eq!(result.can_xuong, 4);
//! println!("{}", result.interpretation);
//! ```

pub mod convenience;
pub mod error;
pub mod global;

// Primary re-exports: users should only need `use tuongso_rs::*`
pub use convenience::{calculate, calculate_on, calculate_str, indices, interpret};
pub use error::TuongsoError;
pub use global::{init, is_initialized, tables};

// Re-export engine types so callers don't need to depend on tuongso_numerology directly.
pub use tuongso_numerology::{
    BirthDate, CalculationResult, Element, Indices, InterpretationTables, NumerologyError,
    digit_sum, reduce_to_single_digit,
};

// Re-export the permission table.
pub use tuongso_access::{Permission, Role, RoleSet, has_permission};
