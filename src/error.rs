use thiserror::Error;

use crate::parse::ParseError;
use crate::ConfigError;

/// Unified error type covering rule evaluation, configuration and rule loading.
///
/// Returned by [`Unlocker::is_unlocked()`](crate::Unlocker::is_unlocked) and by
/// the [`RuleBook`](crate::RuleBook) loaders.
#[derive(Debug, Error)]
pub enum UnlockError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no prerequisite rule for '{target}'")]
    UnknownTarget { target: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
