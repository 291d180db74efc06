//! Error types
//!
//! Every fallible operation in the crate returns [`CompaniesHouseError`].
//! Transport failures land in [`HttpError`], payload problems in
//! [`MappingError`].

use thiserror::Error;

/// Companies House SDK error types
#[derive(Debug, Error)]
pub enum CompaniesHouseError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CompaniesHouseError {
    /// Returns the mapping error when this is a payload problem.
    pub fn as_mapping(&self) -> Option<&MappingError> {
        match self {
            Self::Mapping(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CompaniesHouseError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(HttpError::Reqwest(e))
    }
}

/// Transport-level failures
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status {
        status: http::StatusCode,
        body: String,
    },
}

impl HttpError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Reqwest(e) => e.status(),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Failures turning a search payload into domain types.
///
/// Field names are dotted wire paths such as `items[2].company_status`.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("payload is not a valid search resource: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {source}")]
    InvalidType {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("unrecognised value {value:?} for `{field}`")]
    UnknownValue { field: String, value: String },

    #[error("invalid date {value:?} for `{field}`")]
    InvalidDate { field: String, value: String },
}

impl MappingError {
    /// Wire path of the offending field. `None` when the payload is not a
    /// JSON object at all.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::InvalidType { field, .. }
            | Self::MissingField { field }
            | Self::UnknownValue { field, .. }
            | Self::InvalidDate { field, .. } => Some(field),
        }
    }

    /// Raw wire value that failed to map, when there was one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::UnknownValue { value, .. } | Self::InvalidDate { value, .. } => Some(value),
            _ => None,
        }
    }
}
