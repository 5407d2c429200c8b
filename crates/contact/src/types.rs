use std::str::FromStr;

use strum::{Display, EnumString, VariantArray};

/// The six inputs of the contact form, in declaration order.
///
/// Displays as the camelCase name the form uses; parses from either camelCase or snake_case.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Field {
    #[strum(to_string = "firstName", serialize = "first_name")]
    FirstName,
    #[strum(to_string = "lastName", serialize = "last_name")]
    LastName,
    #[strum(to_string = "email")]
    Email,
    #[strum(to_string = "queryType", serialize = "query_type")]
    QueryType,
    #[strum(to_string = "message")]
    Message,
    #[strum(to_string = "consent")]
    Consent,
}

impl Field {
    /// Resolves a field name coming from the rendering surface.
    pub fn parse(name: &str) -> enquiry_shared::Result<Self> {
        Self::from_str(name.trim()).map_err(|_| enquiry_shared::Error::InvalidField(name.to_owned()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::QueryType => "Query Type",
            Field::Message => "Message",
            Field::Consent => "I consent to being contacted by the team",
        }
    }

    pub(crate) fn expected(&self) -> &'static str {
        match self {
            Field::QueryType => "one of `general`, `support` or nothing",
            Field::Consent => "a boolean",
            _ => "text",
        }
    }
}

#[derive(Display, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parses_both_casings() {
        assert_eq!(Field::parse("firstName").unwrap(), Field::FirstName);
        assert_eq!(Field::parse("first_name").unwrap(), Field::FirstName);
        assert_eq!(Field::parse("queryType").unwrap(), Field::QueryType);
        assert_eq!(Field::parse(" email ").unwrap(), Field::Email);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Field::parse("phone").unwrap_err();
        assert!(matches!(err, enquiry_shared::Error::InvalidField(name) if name == "phone"));
    }

    #[test]
    fn test_fields_order_by_declaration() {
        let mut fields = vec![Field::Consent, Field::Email, Field::FirstName];
        fields.sort();
        assert_eq!(fields, vec![Field::FirstName, Field::Email, Field::Consent]);
        assert_eq!(Field::VARIANTS.len(), 6);
        assert_eq!(Field::QueryType.to_string(), "queryType");
    }
}
