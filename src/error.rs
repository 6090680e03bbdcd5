// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::{AttachmentError, ProductError};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Snapshot(String),
    Attachment(AttachmentError),
    Product(ProductError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Snapshot(e) => write!(f, "Snapshot Error: {}", e),
            Error::Attachment(e) => write!(f, "Attachment Error: {}", e),
            Error::Product(e) => write!(f, "Product Error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Attachment(e) => Some(e),
            Error::Product(e) => Some(e),
            Error::Io(_) | Error::Config(_) | Error::Snapshot(_) => None,
        }
    }
}

impl From<AttachmentError> for Error {
    fn from(err: AttachmentError) -> Self {
        Error::Attachment(err)
    }
}

impl From<ProductError> for Error {
    fn from(err: ProductError) -> Self {
        Error::Product(err)
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

pub type Result<T> = std::result::Result<T, Error>;
