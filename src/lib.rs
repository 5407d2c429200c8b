pub mod config;
pub mod error;
pub mod observability;
pub mod session;

pub use config::Config;
pub use error::AppError;

use enquiry_contact::{FormController, Notifier, SubmitHandler};

/// Builds a controller wired to the configured acknowledgement.
pub fn create_controller<H: SubmitHandler, N: Notifier>(
    config: &Config,
    handler: H,
    notifier: N,
) -> FormController<H, N> {
    FormController::new(handler, notifier).with_notification(config.notification.to_notification())
}
