use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// OptionsError
///

#[derive(Debug, ThisError)]
pub enum OptionsError {
    #[error("options are missing a connection string")]
    MissingConnectionString,

    #[error("connection string is blank")]
    BlankConnectionString,

    #[error("options document failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}

///
/// ConnectionString
///

#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, PartialEq, Serialize)]
pub struct ConnectionString(String);

impl ConnectionString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ConnectionString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

///
/// RepositoryOptions
///
/// Bound options for wiring a repository to its backing store. The only
/// required setting is the connection string; validation runs eagerly at
/// the binding boundary so misconfiguration fails before any repository
/// is built.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RepositoryOptions {
    pub connection_string: Option<ConnectionString>,
}

impl RepositoryOptions {
    /// Bind and validate options from a JSON document.
    pub fn from_json(document: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(document)?;
        options.validate()?;

        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.connection_string().map(|_| ())
    }

    /// The validated connection string.
    pub fn connection_string(&self) -> Result<&ConnectionString, OptionsError> {
        let connection_string = self
            .connection_string
            .as_ref()
            .ok_or(OptionsError::MissingConnectionString)?;

        if connection_string.is_blank() {
            return Err(OptionsError::BlankConnectionString);
        }

        Ok(connection_string)
    }
}
