use crate::{FormValues, Notifier, SubmissionState, SubmitHandler};

impl<H: SubmitHandler, N: Notifier> super::FormController<H, N> {
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.dirty.clear();
        self.submit_count = 0;
        self.revalidate_all = false;
        self.selection_epoch += 1;

        if self.state != SubmissionState::Idle {
            self.transition(SubmissionState::Idle);
        }

        tracing::debug!(selection_epoch = self.selection_epoch, "Contact form reset");
    }
}
