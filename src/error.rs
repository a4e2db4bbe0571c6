// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Showing and hiding notifications never fail from the caller's point of
//! view; these errors only surface from configuration I/O and from parsing
//! severity names supplied as strings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    /// A severity name outside `error`, `success` and `info`.
    #[error("invalid notification type: {0:?}")]
    InvalidKind(String),
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

pub type Result<T> = std::result::Result<T, Error>;
