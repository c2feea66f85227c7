//! Field values as seen by the rule pipeline.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value.
///
/// Inputs usually hand over raw text, but rules also accept numbers and
/// missing values. Empty text is treated exactly like [`Value::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Nothing entered yet.
    #[default]
    Absent,
    /// A numeric value.
    Number(f64),
    /// Raw text, typically the contents of an input.
    Text(String),
}

impl Value {
    /// Check if there is nothing to validate (missing value or empty text).
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Textual form of the value, or `None` when absent.
    ///
    /// Numbers use their shortest decimal form, so `10.0` becomes `"10"`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Absent => None,
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
        }
    }

    /// Numeric interpretation of the value.
    ///
    /// Text is trimmed and parsed as a decimal number. Anything that does
    /// not parse, or parses to a non-finite number, yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Absent => return None,
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// The integer a value starts with.
    ///
    /// Numbers are truncated toward zero. Text is read as optional leading
    /// whitespace, an optional sign and the longest run of ASCII digits, so
    /// `"12abc"` gives 12 and `"7.9"` gives 7. Returns `None` when there is
    /// no leading integer.
    pub fn leading_integer(&self) -> Option<f64> {
        match self {
            Self::Absent => None,
            Self::Number(n) => n.is_finite().then(|| n.trunc()),
            Self::Text(text) => leading_integer(text),
        }
    }
}

fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude = rest[..end].parse::<f64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_text().as_deref().unwrap_or(""))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
