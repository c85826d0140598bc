pub mod errors;
pub mod readiness;

pub use errors::{BackdropError, ConfigError};
pub use readiness::{readiness, Publisher, Readiness};

pub type Result<T> = std::result::Result<T, BackdropError>;
