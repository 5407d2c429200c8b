use std::str::FromStr;

use enquiry_shared::{Error, Result, contact::QueryType};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Field;
use crate::schema::{validate_consent, validate_email_address, validate_message_length};

/// What the visitor has typed, picked and ticked so far.
///
/// The `validate` attributes are the form's schema; see [`crate::RULES`] for the same rules as
/// plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[validate(length(min = 1, message = "This field is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "This field is required"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    #[validate(required(message = "Please select a query type"))]
    pub query_type: Option<QueryType>,
    #[validate(
        length(min = 1, message = "This field is required"),
        custom(function = "validate_message_length")
    )]
    pub message: String,
    #[validate(custom(function = "validate_consent"))]
    pub consent: bool,
}

/// A candidate value for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<QueryType>),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<QueryType> for FieldValue {
    fn from(value: QueryType) -> Self {
        FieldValue::Choice(Some(value))
    }
}

impl From<Option<QueryType>> for FieldValue {
    fn from(value: Option<QueryType>) -> Self {
        FieldValue::Choice(value)
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::FirstName => FieldValue::Text(self.first_name.clone()),
            Field::LastName => FieldValue::Text(self.last_name.clone()),
            Field::Email => FieldValue::Text(self.email.clone()),
            Field::QueryType => FieldValue::Choice(self.query_type),
            Field::Message => FieldValue::Text(self.message.clone()),
            Field::Consent => FieldValue::Flag(self.consent),
        }
    }

    /// Overwrites one field. A value of the wrong kind leaves the form untouched.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::FirstName, FieldValue::Text(value)) => self.first_name = value,
            (Field::LastName, FieldValue::Text(value)) => self.last_name = value,
            (Field::Email, FieldValue::Text(value)) => self.email = value,
            (Field::Message, FieldValue::Text(value)) => self.message = value,
            (Field::QueryType, FieldValue::Choice(value)) => self.query_type = value,
            (Field::QueryType, FieldValue::Text(value)) => {
                self.query_type = parse_query_type(field, &value)?
            }
            (Field::Consent, FieldValue::Flag(value)) => self.consent = value,
            (field, _) => {
                return Err(Error::InvalidValue {
                    field: field.to_string(),
                    expected: field.expected(),
                });
            }
        }

        Ok(())
    }

    /// Whether `field` still holds its initial value.
    pub fn is_default(&self, field: Field) -> bool {
        self.get(field) == FormValues::default().get(field)
    }
}

fn parse_query_type(field: Field, value: &str) -> Result<Option<QueryType>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    QueryType::from_str(value)
        .map(Some)
        .map_err(|_| Error::InvalidValue {
            field: field.to_string(),
            expected: field.expected(),
        })
}
