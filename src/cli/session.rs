use std::fs::File;
use std::io::BufReader;

use enquiry::{Config, create_controller, session::Session};
use enquiry_contact::{LogSubmission, TracingNotifier};

#[tracing::instrument(skip(config))]
pub fn run(config: &Config, script: Option<String>) -> anyhow::Result<bool> {
    let controller = create_controller(config, LogSubmission, TracingNotifier);
    let mut session = Session::new(controller, std::io::stdout().lock());

    let summary = match script {
        Some(path) => session.run(BufReader::new(File::open(&path)?))?,
        None => session.run(std::io::stdin().lock())?,
    };

    tracing::info!(
        commands = summary.commands,
        accepted = summary.accepted,
        rejected = summary.rejected,
        "Session finished"
    );

    Ok(true)
}
