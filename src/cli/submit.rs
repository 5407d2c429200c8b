use std::io::Write;

use clap::Args;
use enquiry::{Config, create_controller};
use enquiry_contact::{Field, LogSubmission, SubmitOutcome, TracingNotifier};

#[derive(Args)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    /// general or support
    #[arg(long)]
    query_type: Option<String>,
    #[arg(long, default_value = "")]
    message: String,
    /// Consent to being contacted
    #[arg(long)]
    consent: bool,
}

/// Returns whether the form was accepted.
#[tracing::instrument(skip_all)]
pub fn submit(config: &Config, args: SubmitArgs) -> anyhow::Result<bool> {
    let mut controller = create_controller(config, LogSubmission, TracingNotifier);

    controller.set(Field::FirstName, args.first_name)?;
    controller.set(Field::LastName, args.last_name)?;
    controller.set(Field::Email, args.email)?;
    controller.set(Field::QueryType, args.query_type.unwrap_or_default())?;
    controller.set(Field::Message, args.message)?;
    controller.set(Field::Consent, args.consent)?;

    let mut out = std::io::stdout().lock();

    match controller.submit() {
        SubmitOutcome::Accepted(values) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&values)?)?;
            Ok(true)
        }
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                writeln!(out, "{field}: {message}")?;
            }
            Ok(false)
        }
    }
}
