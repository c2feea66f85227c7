//! Per-form validation state and its transitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::id::FieldId;

/// Validation state of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Whether the field's current value passes its rules.
    pub is_valid: bool,
    /// Whether a known invalidity should be rendered right now.
    pub show_error: bool,
}

/// How a visible error survives further edits to a field.
///
/// Blurring a field and attempting a submit always reveal errors; the policy
/// only decides what happens to an already visible error when the value
/// changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealPolicy {
    /// Keep the error visible while the previous value was invalid.
    ///
    /// The first edit after the value becomes valid hides it again. The
    /// fixing edit itself still reports `show_error = true`, with nothing to
    /// render since the message is empty; use [`RevealPolicy::WhileInvalid`]
    /// to clear the flag on that edit already.
    #[default]
    UntilFixed,
    /// Keep the error visible while the new value is still invalid.
    WhileInvalid,
    /// Keep the error visible once shown, regardless of validity.
    Sticky,
}

impl RevealPolicy {
    /// Decide `show_error` for an edit, given the entry before the edit.
    fn keeps_error(self, previous: Option<FieldValidation>, now_valid: bool) -> bool {
        let Some(previous) = previous else {
            return false;
        };
        if !previous.show_error {
            return false;
        }
        match self {
            Self::UntilFixed => !previous.is_valid,
            Self::WhileInvalid => !now_valid,
            Self::Sticky => true,
        }
    }
}

/// Validation state for every field of a form.
///
/// Transitions never mutate in place: each returns a new snapshot, so hosts
/// can detect changes by comparing values.
///
/// # Example
///
/// ```
/// use morms::form::{FieldId, FormState};
///
/// let user = FieldId::new("user");
/// let state = FormState::new().on_field_validity_changed(&user, false);
/// assert!(!state.get(&user).unwrap().show_error);
///
/// let state = state.on_field_blurred(&user);
/// assert!(state.get(&user).unwrap().show_error);
/// assert!(!state.is_form_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    fields: HashMap<FieldId, FieldValidation>,
    policy: RevealPolicy,
}

impl FormState {
    /// Create an empty state with the default reveal policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state with the given reveal policy.
    pub fn with_policy(policy: RevealPolicy) -> Self {
        Self {
            fields: HashMap::new(),
            policy,
        }
    }

    /// The reveal policy in effect.
    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// Get the entry for a field (if it has reported yet).
    pub fn get(&self, id: &FieldId) -> Option<FieldValidation> {
        self.fields.get(id).copied()
    }

    /// Number of fields with an entry.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field has reported yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldValidation)> {
        self.fields.iter()
    }

    /// Ids of the fields that are currently invalid, sorted.
    pub fn invalid_fields(&self) -> Vec<&FieldId> {
        let mut ids: Vec<_> = self
            .fields
            .iter()
            .filter(|(_, v)| !v.is_valid)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    /// True iff every field is valid.
    ///
    /// A form without any validated fields is valid.
    pub fn is_form_valid(&self) -> bool {
        self.fields.values().all(|v| v.is_valid)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// A field re-ran its rules.
    ///
    /// Errors stay hidden while a field is being edited, unless the error was
    /// already visible; the reveal policy decides when a visible error is
    /// hidden again.
    pub fn on_field_validity_changed(&self, id: &FieldId, is_valid: bool) -> Self {
        let previous = self.get(id);
        let show_error = self.policy.keeps_error(previous, is_valid);

        let mut next = self.clone();
        next.fields.insert(
            id.clone(),
            FieldValidation {
                is_valid,
                show_error,
            },
        );
        next
    }

    /// Focus left a field: show its error if it is invalid, hide it otherwise.
    ///
    /// Unknown fields are ignored.
    pub fn on_field_blurred(&self, id: &FieldId) -> Self {
        let mut next = self.clone();
        match next.fields.get_mut(id) {
            Some(entry) => entry.show_error = !entry.is_valid,
            None => log::debug!("blur for unknown field '{}' ignored", id),
        }
        next
    }

    /// Submission was attempted: reveal every latent error.
    pub fn on_submit_attempted(&self) -> Self {
        let mut next = self.clone();
        for entry in next.fields.values_mut() {
            entry.show_error = true;
        }
        next
    }
}
