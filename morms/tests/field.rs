//! Tests for field coordination.

use morms::form::{Field, FieldId, FieldValidation, Form};
use morms::validation::{ErrorDisplay, Rule, RuleChain, Value, rules};

fn entry(is_valid: bool, show_error: bool) -> Option<FieldValidation> {
    Some(FieldValidation {
        is_valid,
        show_error,
    })
}

#[test]
fn test_mount_validates_initial_value() {
    let form = Form::new();
    let user = Field::builder(&form, "user")
        .label("Username")
        .min_length(3, None)
        .value("al")
        .mount();

    assert_eq!(user.message(), "Must at least be 3 characters long");
    assert_eq!(form.field(user.id()), entry(false, false));
    assert!(!user.view().should_show_error);
    assert!(!form.is_valid());
}

#[test]
fn test_mount_with_valid_prefill() {
    let form = Form::new();
    let user = Field::builder(&form, "user")
        .required(None)
        .value("alice")
        .mount();

    assert_eq!(user.message(), "");
    assert_eq!(user.value(), Value::from("alice"));
    assert!(form.is_valid());
}

#[test]
fn test_label_defaults_to_id() {
    let form = Form::new();
    let field = Field::builder(&form, "email").mount();
    assert_eq!(field.label(), "email");
    assert_eq!(field.id(), &FieldId::new("email"));
    assert!(field.rules().is_empty());
}

#[test]
fn test_error_hidden_while_typing_then_revealed_on_blur() {
    let form = Form::new();
    let user = Field::builder(&form, "user")
        .required(None)
        .min_length(3, None)
        .mount();

    user.change("a");
    assert!(!user.view().should_show_error);

    user.blur();
    let view = user.view();
    assert!(view.should_show_error);
    assert_eq!(view.error_text, "Must at least be 3 characters long");

    // Still invalid, with a different failure: stays visible with new text.
    user.change("");
    let view = user.view();
    assert!(view.should_show_error);
    assert_eq!(view.error_text, "This field is required");

    // Fixed: nothing to show any more.
    user.change("abc");
    let view = user.view();
    assert!(!view.should_show_error);
    assert_eq!(view.error_text, "");
    assert!(form.is_valid());
}

#[test]
fn test_blur_on_valid_field_shows_nothing() {
    let form = Form::new();
    let user = Field::builder(&form, "user").required(None).mount();
    user.change("alice");
    user.blur();

    assert_eq!(form.field(user.id()), entry(true, false));
    assert!(!user.view().should_show_error);
}

#[test]
fn test_invalid_without_message_is_never_shown() {
    let form = Form::new();
    let field = Field::builder(&form, "silent")
        .rule(Rule::check("silent", |_| false, ""))
        .value("x")
        .mount();

    field.blur();
    assert_eq!(form.field(field.id()), entry(false, true));
    assert!(!field.view().should_show_error);
    assert!(!form.is_valid());
}

#[test]
fn test_fields_sharing_a_label_do_not_collide() {
    let form = Form::new();
    let billing = Field::builder(&form, "billing.street")
        .label("Street")
        .required(None)
        .mount();
    let shipping = Field::builder(&form, "shipping.street")
        .label("Street")
        .required(None)
        .value("Main St 1")
        .mount();

    billing.blur();
    assert!(billing.view().should_show_error);
    assert!(!shipping.view().should_show_error);
    assert_eq!(form.state().len(), 2);
}

#[test]
fn test_error_display_controls_visible_message() {
    let form = Form::new();
    let field = Field::builder(&form, "user")
        .required(None)
        .error_display(ErrorDisplay::None)
        .mount();

    field.blur();
    let view = field.view();
    assert!(view.should_show_error);
    assert_eq!(view.visible_message(), None);

    field.set_error_display(ErrorDisplay::Inline);
    assert_eq!(field.error_display(), ErrorDisplay::Inline);
    assert_eq!(field.view().visible_message(), Some("This field is required"));
}

#[test]
fn test_numeric_values() {
    let form = Form::new();
    let port = Field::builder(&form, "port")
        .integer(None)
        .min_value(1, None)
        .max_value(65535, None)
        .mount();

    port.change(8080);
    assert!(form.is_valid());

    port.change(70000);
    assert_eq!(port.message(), "Must be smaller than 65535");
    assert_eq!(port.value(), Value::Number(70000.0));
}

#[test]
fn test_rule_chain_and_fallible_rules() {
    let form = Form::new();
    let chain = RuleChain::new().with(rules::required(None));
    let field = Field::builder(&form, "hex")
        .rules(chain)
        .try_rule(rules::base(16, None))
        .unwrap()
        .mount();

    field.change("zz");
    assert_eq!(field.message(), "Must be a base 16 number");
    assert_eq!(field.rules().len(), 2);

    assert!(
        Field::builder(&form, "bad")
            .try_rule(rules::base(99, None))
            .is_err()
    );
}

#[test]
fn test_clones_share_the_field() {
    let form = Form::new();
    let field = Field::builder(&form, "user").required(None).mount();
    let handle = field.clone();

    handle.change("alice");
    assert_eq!(field.value(), Value::from("alice"));
}

#[test]
fn test_forms_do_not_share_state() {
    let first = Form::new();
    let second = Form::new();
    Field::builder(&first, "user").required(None).mount();

    assert!(!first.is_valid());
    assert!(second.is_valid());
    assert!(second.state().is_empty());
    assert_ne!(first.id(), second.id());
}
