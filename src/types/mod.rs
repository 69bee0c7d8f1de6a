mod config;
mod error;
mod source;
mod unlocker;

pub use config::UnlockConfig;
pub use error::ConfigError;
pub use source::{RuleBook, RuleSource};
pub use unlocker::{Unlocker, UnlockerBuilder};
