use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::validation::ErrorDisplay;

use super::store::Form;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid and the submit callback ran.
    Submitted,
    /// At least one field was invalid; nothing was submitted.
    Rejected,
}

impl SubmitOutcome {
    /// Check if the submit went through.
    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// What a button renderer needs to draw the global error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitView {
    /// Whether the last submit was rejected.
    pub show_global_error: bool,
    /// Message to show while `show_global_error` is set.
    pub message: String,
    /// Where the renderer should place the message.
    pub display: ErrorDisplay,
}

impl SubmitView {
    /// The message to render, if any.
    pub fn visible_message(&self) -> Option<&str> {
        (self.show_global_error && self.display.shows_message()).then_some(self.message.as_str())
    }
}

/// Gates a form's submit callback behind its aggregate validity.
///
/// Clicking is never disabled: every click reveals all field errors. The
/// button remembers whether the last click was rejected so it can show a
/// single global message.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    form: Form,
    show_global_error: Arc<AtomicBool>,
    error_display: ErrorDisplay,
}

impl SubmitButton {
    /// Create a submit button for `form`.
    pub fn new(form: &Form) -> Self {
        Self {
            form: form.clone(),
            show_global_error: Arc::new(AtomicBool::new(false)),
            error_display: ErrorDisplay::default(),
        }
    }

    /// Set where the global message is placed.
    ///
    /// `ErrorDisplay::None` hides the message entirely; the rejected state
    /// is still tracked.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Attempt a submit.
    pub fn click(&self) -> SubmitOutcome {
        let outcome = self.form.submit();
        self.show_global_error.store(!outcome.is_submitted(), Ordering::SeqCst);
        outcome
    }

    /// Check if the last click was rejected.
    pub fn show_global_error(&self) -> bool {
        self.show_global_error.load(Ordering::SeqCst)
    }

    /// Current state for the renderer.
    pub fn view(&self) -> SubmitView {
        SubmitView {
            show_global_error: self.show_global_error(),
            message: self.form.config().global_error_message.clone(),
            display: self.error_display,
        }
    }
}
