//! Error types for strict model construction.
//!
//! Runtime interaction never errors: selecting a duplicate, selecting past
//! the limit, or unselecting an absent value are silent no-ops. Errors exist
//! only for constructors that treat malformed option data as a bug, such as
//! [`ChoiceList::try_from_pairs`](crate::model::ChoiceList::try_from_pairs).

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a choice model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two choices share the same value key.
    #[error("duplicate choice value '{value}'")]
    DuplicateValue { value: String },
}

impl Error {
    /// Create a duplicate-value error.
    pub fn duplicate_value(value: impl Into<String>) -> Self {
        Self::DuplicateValue {
            value: value.into(),
        }
    }
}
