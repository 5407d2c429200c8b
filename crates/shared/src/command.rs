#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown field `{0}`")]
    InvalidField(String),

    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Caller-contract violations, as opposed to anything that went wrong at runtime.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidField(_) | Self::InvalidValue { .. })
    }
}
