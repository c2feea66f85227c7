//! Form configuration types.

use super::state::RevealPolicy;

/// Message shown by a submit button when the form is not valid.
pub const DEFAULT_GLOBAL_ERROR: &str = "Not all fields are filled in correctly";

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Name used in log lines. Empty falls back to the form's id.
    pub name: String,

    /// How visible errors survive further edits.
    pub reveal_policy: RevealPolicy,

    /// Message reported by submit buttons after a rejected submit.
    pub global_error_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            reveal_policy: RevealPolicy::default(),
            global_error_message: DEFAULT_GLOBAL_ERROR.to_string(),
        }
    }
}

impl FormConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the reveal policy.
    pub fn reveal_policy(mut self, policy: RevealPolicy) -> Self {
        self.reveal_policy = policy;
        self
    }

    /// Set the message shown after a rejected submit.
    pub fn global_error_message(mut self, message: impl Into<String>) -> Self {
        self.global_error_message = message.into();
        self
    }
}
