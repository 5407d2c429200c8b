use enquiry_contact::{
    Field, FieldValue, INVALID_EMAIL, MESSAGE_TOO_LONG, QUERY_TYPE_REQUIRED, QueryType,
};
use enquiry_shared::Error;

mod helpers;

#[test]
fn test_set_field_does_not_validate_untouched() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.set_field("email", "not-an-email")?;

    assert!(controller.errors().is_empty());
    assert!(controller.is_field_dirty(Field::Email));
    assert!(!controller.is_touched(Field::Email));

    Ok(())
}

#[test]
fn test_touch_validates_then_live_revalidates() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.set_field("email", "a@b.com")?;
    controller.mark_touched("email")?;
    assert_eq!(controller.error(Field::Email), None);

    controller.set_field("email", "not-an-email")?;
    assert_eq!(controller.error(Field::Email), Some(INVALID_EMAIL));

    controller.mark_touched("email")?;
    assert_eq!(controller.error(Field::Email), Some(INVALID_EMAIL));

    controller.set_field("email", "a@b.com")?;
    assert_eq!(controller.error(Field::Email), None);

    Ok(())
}

#[test]
fn test_query_type_error_cleared_by_selection() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    let outcome = controller.submit();
    assert!(!outcome.is_accepted());
    assert_eq!(controller.error(Field::QueryType), Some(QUERY_TYPE_REQUIRED));

    controller.set_field("queryType", "support")?;
    controller.mark_touched("queryType")?;

    assert_eq!(controller.error(Field::QueryType), None);
    assert_eq!(controller.values().query_type, Some(QueryType::Support));

    Ok(())
}

#[test]
fn test_message_too_long_reported_on_touch() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.set_field("message", "x".repeat(500))?;
    controller.mark_touched("message")?;
    assert_eq!(controller.error(Field::Message), None);

    controller.set_field("message", "x".repeat(501))?;
    assert_eq!(controller.error(Field::Message), Some(MESSAGE_TOO_LONG));

    Ok(())
}

#[test]
fn test_touch_only_reports_that_field() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.mark_touched("firstName")?;

    assert_eq!(controller.errors().len(), 1);
    assert!(controller.errors().contains(Field::FirstName));

    Ok(())
}

#[test]
fn test_unknown_field_is_rejected() {
    let mut controller = helpers::setup_controller();

    let err = controller.set_field("phone", "555").unwrap_err();
    assert!(matches!(err, Error::InvalidField(ref name) if name == "phone"));
    assert!(err.is_contract_violation());

    let err = controller.mark_touched("phone").unwrap_err();
    assert!(matches!(err, Error::InvalidField(_)));
    assert!(!controller.is_dirty());
}

#[test]
fn test_wrong_kind_is_rejected() {
    let mut controller = helpers::setup_controller();

    let err = controller.set_field("consent", "yes").unwrap_err();
    assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "consent"));

    let err = controller.set_field("queryType", "billing").unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
    assert_eq!(controller.values().query_type, None);
}

#[test]
fn test_dirty_follows_default() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.set_field("last_name", "Lovelace")?;
    assert!(controller.is_dirty());

    controller.set_field("last_name", "")?;
    assert!(!controller.is_dirty());

    Ok(())
}

#[test]
fn test_field_view_reflects_state() -> anyhow::Result<()> {
    let mut controller = helpers::setup_controller();
    controller.set_field("email", "ada@")?;
    controller.mark_touched("email")?;

    let view = controller.field_view(Field::Email);
    assert_eq!(view.label, "Email Address");
    assert_eq!(view.value, FieldValue::Text("ada@".to_owned()));
    assert_eq!(view.error, Some(INVALID_EMAIL));
    assert!(view.touched);
    assert!(view.dirty);

    let view = controller.field_view(Field::Consent);
    assert_eq!(view.value, FieldValue::Flag(false));
    assert_eq!(view.error, None);
    assert!(!view.touched);

    Ok(())
}
