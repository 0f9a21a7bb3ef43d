use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraftError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or non-2xx status from the REST backend.
    #[error("Backend request failed: {0}")]
    Remote(#[from] reqwest::Error),

    /// The backend answered 2xx but the body did not match the expected shape.
    #[error("Unexpected backend payload: {0}")]
    Shape(String),

    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GraftError>;
