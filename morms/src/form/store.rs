use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::config::FormConfig;
use super::id::{FieldId, FormId};
use super::state::{FieldValidation, FormState};
use super::submit::SubmitOutcome;

/// Type alias for the callback run after a successful submit.
type SubmitCallback = Box<dyn FnMut() + Send>;

/// Shared handle to a form's validation state.
///
/// `Form` is the single writer of its [`FormState`]. Fields and submit
/// buttons are constructed against a `&Form` and report to it through
/// [`Form::report_validity`], [`Form::report_blur`] and [`Form::submit`].
/// Cloning is cheap and shares the same store; separate `Form::new()` calls
/// never share state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use morms::form::{Field, Form, SubmitButton};
///
/// let submitted = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&submitted);
/// let form = Form::new().on_submit(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let user = Field::builder(&form, "user").label("Username").required(None).mount();
/// let submit = SubmitButton::new(&form);
///
/// assert!(!submit.click().is_submitted());
/// assert!(user.view().should_show_error);
///
/// user.change("alice");
/// assert!(submit.click().is_submitted());
/// assert_eq!(submitted.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Form {
    id: FormId,
    config: Arc<FormConfig>,
    state: Arc<RwLock<FormState>>,
    on_submit: Arc<Mutex<Option<SubmitCallback>>>,
    dirty: Arc<AtomicBool>,
}

impl Form {
    /// Create a form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a form with the given configuration.
    pub fn with_config(config: FormConfig) -> Self {
        let state = FormState::with_policy(config.reveal_policy);
        Self {
            id: FormId::new(),
            config: Arc::new(config),
            state: Arc::new(RwLock::new(state)),
            on_submit: Arc::new(Mutex::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the callback run after a successful submit and return the form.
    pub fn on_submit<F>(self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_submit(f);
        self
    }

    /// Replace the callback run after a successful submit.
    pub fn set_on_submit<F>(&self, f: F)
    where
        F: FnMut() + Send + 'static,
    {
        let mut slot = self.on_submit.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Box::new(f));
    }

    /// Get the unique ID for this form
    pub fn id(&self) -> FormId {
        self.id
    }

    /// Name used in log lines: the configured name, or the form's id when
    /// none was set.
    pub fn name(&self) -> Cow<'_, str> {
        if self.config.name.is_empty() {
            Cow::Owned(self.id.to_string())
        } else {
            Cow::Borrowed(&self.config.name)
        }
    }

    /// The form's configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Get the entry for one field (if it has reported yet).
    pub fn field(&self, id: &FieldId) -> Option<FieldValidation> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
    }

    /// Check if every field is valid. An empty form is valid.
    pub fn is_valid(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_form_valid()
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Record that a field re-ran its rules.
    pub fn report_validity(&self, id: &FieldId, is_valid: bool) {
        self.apply(|state| state.on_field_validity_changed(id, is_valid));
        log::debug!("{}: field '{}' reported valid={}", self.name(), id, is_valid);
    }

    /// Record that focus left a field.
    pub fn report_blur(&self, id: &FieldId) {
        self.apply(|state| state.on_field_blurred(id));
        log::debug!("{}: field '{}' blurred", self.name(), id);
    }

    /// Attempt a submit.
    ///
    /// Reveals every field's error, then runs the submit callback if the
    /// whole form is valid. The callback runs after the state lock has been
    /// released, so it may read the form; a submit triggered from inside the
    /// callback does not run the callback again.
    pub fn submit(&self) -> SubmitOutcome {
        let is_valid = {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = guard.on_submit_attempted();
            self.replace(&mut guard, next);
            guard.is_form_valid()
        };

        if !is_valid {
            let state = self.state();
            log::debug!(
                "{}: submit rejected, invalid fields: {:?}",
                self.name(),
                state.invalid_fields()
            );
            return SubmitOutcome::Rejected;
        }

        log::debug!("{}: submit accepted", self.name());
        self.run_submit_callback();
        SubmitOutcome::Submitted
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the flag was last cleared
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn apply(&self, transition: impl FnOnce(&FormState) -> FormState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = transition(&*guard);
        self.replace(&mut guard, next);
    }

    fn replace(&self, current: &mut FormState, next: FormState) {
        if *current != next {
            *current = next;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn run_submit_callback(&self) {
        let callback = self
            .on_submit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let mut running = RunningCallback {
            slot: &self.on_submit,
            callback,
        };
        if let Some(callback) = running.callback.as_mut() {
            callback();
        }
    }
}

/// A submit callback taken out of its slot while it runs.
///
/// Dropping puts it back, also when the callback panics, unless another
/// callback was installed in the meantime.
struct RunningCallback<'a> {
    slot: &'a Mutex<Option<SubmitCallback>>,
    callback: Option<SubmitCallback>,
}

impl Drop for RunningCallback<'_> {
    fn drop(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            *slot = Some(callback);
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
