//! Form state coordination.
//!
//! A [`Form`] owns the validation state of its fields. Each [`Field`] runs
//! its rules on every change and reports the result upward; the form decides
//! when a field's error becomes visible:
//!
//! - while a field is being edited for the first time, errors stay hidden;
//! - once focus leaves an invalid field, its error is shown;
//! - a submit attempt through a [`SubmitButton`] reveals every error and only
//!   runs the submit callback when all fields are valid.
//!
//! # Example
//!
//! ```
//! use morms::form::{Field, Form, SubmitButton};
//!
//! let form = Form::new();
//! let user = Field::builder(&form, "user")
//!     .label("Username")
//!     .required(None)
//!     .min_length(3, None)
//!     .mount();
//!
//! user.change("al");
//! assert!(!user.view().should_show_error);
//!
//! user.blur();
//! assert_eq!(
//!     user.view().visible_message(),
//!     Some("Must at least be 3 characters long")
//! );
//!
//! let submit = SubmitButton::new(&form);
//! assert!(!submit.click().is_submitted());
//! assert!(submit.view().visible_message().is_some());
//! ```

mod config;
mod field;
mod id;
mod state;
mod store;
mod submit;

pub use config::{DEFAULT_GLOBAL_ERROR, FormConfig};
pub use field::{Field, FieldBuilder, FieldView};
pub use id::{FieldId, FormId};
pub use state::{FieldValidation, FormState, RevealPolicy};
pub use store::Form;
pub use submit::{SubmitButton, SubmitOutcome, SubmitView};
