//! Decide whether a course is unlocked by the courses a student has
//! completed, from free-text prerequisite rules such as
//! `"Prerequisite: COMP1531 and (COMP2521 or COMP1927)"`.
//!
//! ```
//! use coursegate::{RuleBook, Unlocker};
//!
//! let book = RuleBook::from_json(r#"{
//!     "COMP1521": "Prerequisite: COMP1511",
//!     "COMP3900": "Prerequisite: COMP1531 and 36 units of credit"
//! }"#).unwrap();
//! let unlocker = Unlocker::new(book);
//!
//! assert!(unlocker.is_unlocked(&["COMP1511"], "COMP1521").unwrap());
//! assert!(!unlocker.is_unlocked(&["COMP1531", "COMP1511"], "COMP3900").unwrap());
//! ```

mod error;
mod evaluate;
mod normalize;
pub mod parse;
mod types;

pub use error::UnlockError;
pub use normalize::normalize;
pub use types::{ConfigError, RuleBook, RuleSource, UnlockConfig, Unlocker, UnlockerBuilder};
