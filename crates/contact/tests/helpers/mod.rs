use enquiry_contact::{
    Field, FormController, FormValues, Notification, Notifier, QueryType, SubmitHandler,
};

#[derive(Default)]
pub struct RecordingHandler {
    pub submitted: Vec<FormValues>,
}

impl SubmitHandler for RecordingHandler {
    fn submitted(&mut self, values: &FormValues) {
        self.submitted.push(values.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.shown.push(notification.clone());
    }
}

pub type TestController = FormController<RecordingHandler, RecordingNotifier>;

pub fn setup_controller() -> TestController {
    FormController::new(RecordingHandler::default(), RecordingNotifier::default())
}

#[allow(dead_code)]
pub fn fill_valid(controller: &mut TestController) -> anyhow::Result<()> {
    controller.set_field("firstName", "Ada")?;
    controller.set_field("lastName", "Lovelace")?;
    controller.set_field("email", "ada@example.com")?;
    controller.set_field("queryType", QueryType::General)?;
    controller.set_field("message", "I would like to know more.")?;
    controller.set_field("consent", true)?;

    Ok(())
}

#[allow(dead_code)]
pub fn valid_values() -> FormValues {
    FormValues {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        query_type: Some(QueryType::General),
        message: "I would like to know more.".to_owned(),
        consent: true,
    }
}

/// Puts `field` into a state that fails its rule, leaving the others valid.
#[allow(dead_code)]
pub fn invalidate(controller: &mut TestController, field: Field) -> anyhow::Result<()> {
    match field {
        Field::FirstName | Field::LastName | Field::Message => controller.set(field, "")?,
        Field::Email => controller.set(field, "not-an-email")?,
        Field::QueryType => controller.set(field, None::<QueryType>)?,
        Field::Consent => controller.set(field, false)?,
    }

    Ok(())
}
