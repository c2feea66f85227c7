//! Form validation and field-state coordination.
//!
//! - [`validation`]: values, rules and short-circuiting rule chains.
//! - [`form`]: the shared form state, field coordinators and submit gating.
//! - [`presets`]: ready-made field kinds.

pub mod form;
pub mod presets;
pub mod validation;

pub mod prelude {
    pub use crate::form::{
        Field, FieldBuilder, FieldId, FieldView, Form, FormConfig, FormState, RevealPolicy,
        SubmitButton, SubmitOutcome, SubmitView,
    };
    pub use crate::presets::{ip_input, text_input};
    pub use crate::validation::{
        ErrorDisplay, Rule, RuleChain, RuleError, ValidationFailure, ValidationOutcome, Value,
        rules,
    };
}
