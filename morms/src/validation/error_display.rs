use serde::{Deserialize, Serialize};

/// Where a renderer should place a validation message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorDisplay {
    /// Show the message below the control (default).
    #[default]
    Below,
    /// Show the message inline, next to the control.
    Inline,
    /// Don't display the message; the control only shows error styling.
    None,
}

impl ErrorDisplay {
    /// Check if a message should be rendered at all.
    pub fn shows_message(self) -> bool {
        !matches!(self, Self::None)
    }
}
