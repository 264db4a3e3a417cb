use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream error: {status}")]
    Upstream {
        status: StatusCode,
        status_text: String,
    },

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// The request URL carries the credential as a query parameter.
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.without_url())
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Message of the underlying failure, without the variant prefix.
    pub fn client_message(&self) -> String {
        match self {
            Self::Config(s) | Self::Internal(s) => s.clone(),
            Self::Upstream {
                status,
                status_text,
            } => format!("{} {}", status.as_u16(), status_text),
            Self::Network(e) => e.to_string(),
            Self::Serialization(e) => e.to_string(),
            Self::Yaml(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::AddrParse(e) => e.to_string(),
        }
    }
}
