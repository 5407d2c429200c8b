use enquiry_shared::Result;

use crate::{Field, FieldValue, Notifier, SubmitHandler};

impl<H: SubmitHandler, N: Notifier> super::FormController<H, N> {
    /// Overwrites a field by name. Unknown names and values of the wrong kind are rejected
    /// without touching the form.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field = Field::parse(name)?;
        self.set(field, value)
    }

    /// Overwrites `field` and marks it dirty when it differs from its default. Validation only
    /// runs once the field has been touched or a submit has been rejected.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<()> {
        self.values.set(field, value.into())?;

        if self.values.is_default(field) {
            self.dirty.remove(&field);
        } else {
            self.dirty.insert(field);
        }

        if self.revalidate_all || self.touched.contains(&field) {
            self.revalidate(field);
        }

        tracing::trace!(%field, "Field updated");

        Ok(())
    }

    /// Records that the visitor left `field` and validates it right away.
    pub fn mark_touched(&mut self, name: &str) -> Result<()> {
        let field = Field::parse(name)?;
        self.touch(field);

        Ok(())
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }
}
