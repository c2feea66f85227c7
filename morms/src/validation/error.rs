use thiserror::Error;

/// Errors that can occur when constructing a rule.
///
/// Evaluating a rule never fails; only building one with bad parameters does.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The radix for a `base` rule is outside `2..=36`.
    #[error("Radix {radix} is not supported, expected a value between 2 and 36")]
    InvalidRadix {
        /// The rejected radix.
        radix: u32,
    },

    /// The expression for a `pattern` rule does not compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected expression.
        pattern: String,
        /// Compilation error from the regex engine.
        source: regex::Error,
    },
}
