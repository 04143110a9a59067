// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every variant carries a plain message so the error stays `Clone` and can
//! travel inside Iced messages. [`Error::i18n_key`] maps each variant to the
//! localized text shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Content Error: {0}")]
    Content(ContentError),
    #[error("HTTP Error: {0}")]
    Http(String),
    #[error("Decode Error: {0}")]
    Decode(String),
}

/// Specific failures of a content source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The backend answered but the payload could not be parsed.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A record was rejected (missing title, year out of range, ...).
    #[error("invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),

    /// The remote source was selected without an endpoint.
    #[error("no endpoint configured")]
    MissingEndpoint,
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Content(ContentError::MissingEndpoint) => "error-content-no-endpoint",
            Error::Content(_) => "error-content",
            Error::Http(_) => "error-network",
            Error::Decode(_) => "error-image-decode",
        }
    }
}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(ContentError::Malformed(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
