use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QueryType {
    General,
    Support,
}

impl QueryType {
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::General => "General Enquiry",
            QueryType::Support => "Support Request",
        }
    }
}
