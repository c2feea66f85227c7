//! Ready-made field kinds.
//!
//! Each preset returns a [`FieldBuilder`] so callers can chain their own
//! rules before mounting.

use crate::form::{Field, FieldBuilder, FieldId, Form};

/// A plain text field.
pub fn text_input(form: &Form, id: impl Into<FieldId>, label: impl Into<String>) -> FieldBuilder {
    Field::builder(form, id).label(label)
}

/// A field that must hold an IPv4 address.
///
/// The address check comes first, so it runs before any rule the caller
/// chains on.
///
/// # Example
///
/// ```
/// use morms::form::Form;
/// use morms::presets::ip_input;
///
/// let form = Form::new();
/// let ip = ip_input(&form, "ip", "IP address").required(None).mount();
///
/// ip.change("10.0.0.300");
/// assert_eq!(ip.message(), "Not a valid IP address");
/// ip.change("10.0.0.1");
/// assert!(form.is_valid());
/// ```
pub fn ip_input(form: &Form, id: impl Into<FieldId>, label: impl Into<String>) -> FieldBuilder {
    text_input(form, id, label).ip_address(None)
}
