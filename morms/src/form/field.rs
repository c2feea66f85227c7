use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::validation::{ErrorDisplay, Rule, RuleChain, RuleError, Value, rules};

use super::id::FieldId;
use super::store::Form;

/// What a field renderer needs to draw a field's error state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    /// Whether the field should be styled as erroneous right now.
    pub should_show_error: bool,
    /// The current message from the rule chain, `""` when valid.
    pub error_text: String,
    /// Where the renderer should place the message.
    pub display: ErrorDisplay,
}

impl FieldView {
    /// The message to render, if any.
    pub fn visible_message(&self) -> Option<&str> {
        (self.should_show_error && self.display.shows_message()).then_some(self.error_text.as_str())
    }
}

/// Internal state for a field
#[derive(Debug, Default)]
struct FieldInner {
    /// Current value
    value: Value,
    /// Message from the last evaluation, empty when valid
    message: String,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// Coordinates one input with its form.
///
/// A field owns its value and rule chain. Every change re-runs the chain and
/// reports the resulting validity to the form; blurring the field asks the
/// form to reveal the error. The form in turn decides whether the field's
/// message is visible, see [`Field::view`].
///
/// Cloning is cheap and shares the same field.
#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    label: String,
    rules: RuleChain,
    form: Form,
    inner: Arc<RwLock<FieldInner>>,
}

impl Field {
    /// Start building a field for `form`.
    pub fn builder(form: &Form, id: impl Into<FieldId>) -> FieldBuilder {
        FieldBuilder {
            form: form.clone(),
            id: id.into(),
            label: None,
            rules: RuleChain::new(),
            value: Value::Absent,
            error_display: ErrorDisplay::default(),
        }
    }

    /// Mount a field: validate the initial value and report it to the form.
    fn mount(builder: FieldBuilder) -> Self {
        let FieldBuilder {
            form,
            id,
            label,
            rules,
            value,
            error_display,
        } = builder;

        let label = label.unwrap_or_else(|| id.to_string());
        let field = Self {
            id,
            label,
            rules,
            form,
            inner: Arc::new(RwLock::new(FieldInner {
                value: Value::Absent,
                message: String::new(),
                error_display,
            })),
        };
        field.change(value);
        field
    }

    /// Get the field's id
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The rule chain run on every change.
    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    /// The form this field reports to.
    pub fn form(&self) -> &Form {
        &self.form
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current value
    pub fn value(&self) -> Value {
        self.read().value.clone()
    }

    /// Get the message from the last evaluation, `""` when valid
    pub fn message(&self) -> String {
        self.read().message.clone()
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.read().error_display
    }

    /// Current error state for the renderer.
    ///
    /// The error is shown only when the form has revealed it for this field
    /// and the last evaluation produced a message.
    pub fn view(&self) -> FieldView {
        let revealed = self.form.field(&self.id).is_some_and(|v| v.show_error);
        let (message, display) = {
            let guard = self.read();
            (guard.message.clone(), guard.error_display)
        };

        FieldView {
            should_show_error: revealed && !message.is_empty(),
            error_text: message,
            display,
        }
    }

    // -------------------------------------------------------------------------
    // Events (called by the renderer)
    // -------------------------------------------------------------------------

    /// The value changed: re-run the rules and report to the form.
    pub fn change(&self, value: impl Into<Value>) {
        let value = value.into();
        let outcome = self.rules.evaluate(&value);

        {
            let mut guard = self.write();
            guard.value = value;
            guard.message = outcome.message().to_string();
        }

        self.form.report_validity(&self.id, outcome.is_valid());
    }

    /// Focus left the field.
    pub fn blur(&self) {
        self.form.report_blur(&self.id);
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        self.write().error_display = display;
    }

    fn read(&self) -> RwLockReadGuard<'_, FieldInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FieldInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder for a [`Field`] and its rule chain.
///
/// Rules run in the order they are added.
///
/// # Example
///
/// ```
/// use morms::form::{Field, Form};
///
/// let form = Form::new();
/// let password = Field::builder(&form, "password")
///     .label("Password")
///     .required(None)
///     .min_length(6, None)
///     .max_length(30, None)
///     .mount();
///
/// assert_eq!(password.message(), "This field is required");
/// assert!(!form.is_valid());
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    form: Form,
    id: FieldId,
    label: Option<String>,
    rules: RuleChain,
    value: Value,
    error_display: ErrorDisplay,
}

impl FieldBuilder {
    /// Set the display label. Defaults to the id.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial value. Defaults to absent.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set where the renderer should place the message.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Append a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a fallible rule, propagating its construction error.
    pub fn try_rule(self, rule: Result<Rule, RuleError>) -> Result<Self, RuleError> {
        Ok(self.rule(rule?))
    }

    /// Append every rule of a chain.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, message: Option<&str>) -> Self {
        self.rule(rules::required(message))
    }

    /// Require a whole number.
    pub fn integer(self, message: Option<&str>) -> Self {
        self.rule(rules::integer(message))
    }

    /// Require a decimal number.
    pub fn float(self, max_decimals: Option<usize>, message: Option<&str>) -> Self {
        self.rule(rules::float(max_decimals, message))
    }

    /// Require the value to be at most `bound`.
    pub fn max_value(self, bound: i64, message: Option<&str>) -> Self {
        self.rule(rules::max_value(bound, message))
    }

    /// Require the value to be at least `bound`.
    pub fn min_value(self, bound: i64, message: Option<&str>) -> Self {
        self.rule(rules::min_value(bound, message))
    }

    /// Require a MAC address.
    pub fn mac_address(self, message: Option<&str>) -> Self {
        self.rule(rules::mac_address(message))
    }

    /// Require an IPv4 address.
    pub fn ip_address(self, message: Option<&str>) -> Self {
        self.rule(rules::ip_address(message))
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, message: Option<&str>) -> Self {
        self.rule(rules::min_length(min, message))
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, message: Option<&str>) -> Self {
        self.rule(rules::max_length(max, message))
    }

    /// Require a valid email address.
    pub fn email(self, message: Option<&str>) -> Self {
        self.rule(rules::email(message))
    }

    /// Mount the field: validate the initial value and report it to the form.
    pub fn mount(self) -> Field {
        Field::mount(self)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_accessors_read_through_poisoned_lock() {
        let form = Form::new();
        let field = Field::builder(&form, "user").required(None).mount();
        field.change("alice");

        let inner = Arc::clone(&field.inner);
        let _ = thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("poison the field lock");
        })
        .join();
        assert!(field.inner.is_poisoned());

        assert_eq!(field.value(), Value::from("alice"));
        assert_eq!(field.message(), "");

        field.set_error_display(ErrorDisplay::Inline);
        assert_eq!(field.error_display(), ErrorDisplay::Inline);

        field.change("");
        assert_eq!(field.message(), "This field is required");
        assert_eq!(field.view().display, ErrorDisplay::Inline);
    }
}
