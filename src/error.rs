//! Error types for configuration document loading and resolution.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find configuration XML. Expected path {path} but file does not exist")]
    DocumentNotFound { path: Utf8PathBuf },

    #[error("Could not find parameter with code {code}")]
    ParameterNotFound { code: String },

    #[error("Parameter {code} has no navigation path")]
    NoNavigationPath { code: String },

    #[error("Malformed product catalog: {reason}")]
    MalformedCatalog { reason: String },

    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML {context}: {source}")]
    Xml {
        context: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Failed to parse JSON {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration file {path}: {source}")]
    Config {
        path: Utf8PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn malformed_catalog(reason: impl Into<String>) -> Self {
        Error::MalformedCatalog {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
