//! Rule pipeline for validating field values.
//!
//! A [`RuleChain`] runs its rules left to right and stops at the first one
//! that rejects the value. Built-in rules live in [`rules`]; custom rules are
//! plain closures wrapped in a [`Rule`].
//!
//! # Example
//!
//! ```
//! use morms::validation::{RuleChain, Value, rules};
//!
//! let password = RuleChain::new()
//!     .with(rules::required(None))
//!     .with(rules::min_length(6, None))
//!     .with(rules::max_length(30, None));
//!
//! assert_eq!(
//!     password.evaluate(&Value::from("")).message(),
//!     "This field is required"
//! );
//! assert_eq!(
//!     password.evaluate(&Value::from("abc")).message(),
//!     "Must at least be 6 characters long"
//! );
//! assert!(password.evaluate(&Value::from("hunter22")).is_valid());
//! ```

mod error;
mod error_display;
mod result;
mod rule;
pub mod rules;
mod value;

pub use error::RuleError;
pub use error_display::ErrorDisplay;
pub use result::{ValidationFailure, ValidationOutcome};
pub use rule::{Rule, RuleChain, evaluate};
pub use value::Value;
