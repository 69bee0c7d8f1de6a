use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("default subject prefix must not be empty")]
    EmptyPrefix,

    #[error("default subject prefix '{prefix}' must be uppercase ASCII letters")]
    InvalidPrefix { prefix: String },

    #[error("entry point must not be empty")]
    EmptyEntryPoint,

    #[error("credits per course must be greater than zero")]
    ZeroCredits,

    #[error("maximum nesting depth must be greater than zero")]
    ZeroDepth,
}
