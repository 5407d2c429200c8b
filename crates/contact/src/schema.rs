use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError};

use crate::{Field, FormValues};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const QUERY_TYPE_REQUIRED: &str = "Please select a query type";
pub const MESSAGE_TOO_LONG: &str = "Message must be 500 characters or fewer";
pub const CONSENT_REQUIRED: &str = "To submit this form, please consent to being contacted";

pub const MESSAGE_MAX_CHARS: usize = 500;

pub struct Rule {
    pub field: Field,
    pub rule: &'static str,
    pub message: &'static str,
}

/// The form's schema as data, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        field: Field::FirstName,
        rule: "non-empty",
        message: REQUIRED,
    },
    Rule {
        field: Field::LastName,
        rule: "non-empty",
        message: REQUIRED,
    },
    Rule {
        field: Field::Email,
        rule: "email address",
        message: INVALID_EMAIL,
    },
    Rule {
        field: Field::QueryType,
        rule: "one of general, support",
        message: QUERY_TYPE_REQUIRED,
    },
    Rule {
        field: Field::Message,
        rule: "non-empty",
        message: REQUIRED,
    },
    Rule {
        field: Field::Message,
        rule: "at most 500 characters",
        message: MESSAGE_TOO_LONG,
    },
    Rule {
        field: Field::Consent,
        rule: "checked",
        message: CONSENT_REQUIRED,
    },
];

// Local part of word chars plus `'+-.` ending in a non-dot, then dotted labels and a TLD of two
// or more letters. Leading dots and `..` are checked separately since `regex` has no lookahead.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

pub(crate) fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.starts_with('.') || email.contains("..") || !RE_EMAIL.is_match(email) {
        return Err(ValidationError::new("email").with_message(INVALID_EMAIL.into()));
    }

    Ok(())
}

pub(crate) fn validate_message_length(message: &str) -> Result<(), ValidationError> {
    if message.chars().count() > MESSAGE_MAX_CHARS {
        return Err(ValidationError::new("message_too_long").with_message(MESSAGE_TOO_LONG.into()));
    }

    Ok(())
}

pub(crate) fn validate_consent(consent: &bool) -> Result<(), ValidationError> {
    if !*consent {
        return Err(ValidationError::new("consent_required").with_message(CONSENT_REQUIRED.into()));
    }

    Ok(())
}

/// Per-field messages for every field currently failing its rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub(crate) fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Runs the whole schema; every failing field is reported, not only the first.
pub fn validate_all(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let Err(validation_errors) = values.validate() else {
        return errors;
    };

    for (key, field_errors) in validation_errors.field_errors() {
        let Ok(field) = key.parse::<Field>() else {
            tracing::warn!(field = %key, "Schema reported an error for an unknown field");
            continue;
        };

        let message = field_errors
            .first()
            .map(message_of)
            .unwrap_or_else(|| REQUIRED.to_owned());

        errors.insert(field, message);
    }

    errors
}

pub fn validate_field(values: &FormValues, field: Field) -> Option<String> {
    validate_all(values).remove(field)
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
