use std::collections::BTreeSet;

use crate::{
    Field, FieldErrors, FieldValue, FormValues, LogSubmission, Notification, Notifier,
    SubmissionState, SubmitHandler, TracingNotifier, validate_field,
};

mod reset;
mod set_field;
mod submit_form;

pub use submit_form::SubmitOutcome;

/// Owns the contact form's values, errors and submit lifecycle.
///
/// Every operation runs to completion synchronously; the rendering surface feeds it events in
/// the order the visitor produces them and repaints from [`FormController::field_view`].
pub struct FormController<H = LogSubmission, N = TracingNotifier> {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    dirty: BTreeSet<Field>,
    state: SubmissionState,
    submit_count: u32,
    revalidate_all: bool,
    selection_epoch: u64,
    notification: Notification,
    handler: H,
    notifier: N,
}

/// Everything the rendering surface needs to paint one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: Field,
    pub label: &'static str,
    pub value: FieldValue,
    pub error: Option<&'a str>,
    pub touched: bool,
    pub dirty: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(LogSubmission, TracingNotifier)
    }
}

impl<H: SubmitHandler, N: Notifier> FormController<H, N> {
    pub fn new(handler: H, notifier: N) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            dirty: BTreeSet::new(),
            state: SubmissionState::Idle,
            submit_count: 0,
            revalidate_all: false,
            selection_epoch: 0,
            notification: Notification::default(),
            handler,
            notifier,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = notification;
        self
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Bumped on every reset; the rendering surface remounts the query type radio group when
    /// it changes, since a radio group cannot paint "nothing selected" once picked.
    pub fn selection_epoch(&self) -> u64 {
        self.selection_epoch
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_field_dirty(&self, field: Field) -> bool {
        self.dirty.contains(&field)
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn field_view(&self, field: Field) -> FieldView<'_> {
        FieldView {
            field,
            label: field.label(),
            value: self.values.get(field),
            error: self.errors.get(field),
            touched: self.is_touched(field),
            dirty: self.is_field_dirty(field),
        }
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(&self.values, field) {
            Some(message) => {
                tracing::debug!(%field, %message, "Field failed validation");
                self.errors.insert(field, message);
            }
            None => {
                if self.errors.remove(field).is_some() {
                    tracing::debug!(%field, "Field error cleared");
                }
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = %self.state, to = %next, "Submission state changed");
        self.state = next;
    }
}
