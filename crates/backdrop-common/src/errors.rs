use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("configuration was never published")]
    NotReady,
}

#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("provider error: {0}")]
    Provider(String),
}
