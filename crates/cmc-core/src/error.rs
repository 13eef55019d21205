use thiserror::Error;

/// The main error type for cmc-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Request options violate an endpoint rule; raised before any request is made
  #[error("Invalid request options: {0}")]
  Validation(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// URL could not be built
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Response body was not usable
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),
}

impl Error {
  /// Creates a Validation error
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }

  /// True when the error was raised by option validation
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation(_))
  }
}

/// Result type alias for cmc-* crates
pub type Result<T> = std::result::Result<T, Error>;
