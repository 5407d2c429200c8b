use crate::{FieldErrors, FormValues, Notifier, SubmissionState, SubmitHandler, validate_all};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The snapshot that was handed to the submit handler before the form was reset.
    Accepted(FormValues),
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

impl<H: SubmitHandler, N: Notifier> super::FormController<H, N> {
    /// Validates every field. On success the handler and notifier each fire once and the
    /// whole form resets; on failure nothing is cleared and every failing field is reported.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.transition(SubmissionState::Validating);

        let errors = validate_all(&self.values);

        if !errors.is_empty() {
            self.errors = errors.clone();
            self.revalidate_all = true;
            self.transition(SubmissionState::Rejected);

            tracing::info!(
                attempt = self.submit_count,
                failing = ?errors.fields().collect::<Vec<_>>(),
                "Contact form rejected"
            );

            self.transition(SubmissionState::Idle);

            return SubmitOutcome::Rejected(errors);
        }

        self.transition(SubmissionState::Accepted);

        let values = self.values.clone();
        self.handler.submitted(&values);
        self.notifier.notify(&self.notification);

        tracing::info!(attempt = self.submit_count, "Contact form accepted");

        self.reset();

        SubmitOutcome::Accepted(values)
    }
}
