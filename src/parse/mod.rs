//! Tokenizing and clause classification for prerequisite rule text.

mod clause;
mod error;
mod grammar;
mod token;

pub use clause::{Clause, ClauseFault, ClauseKind};
pub use error::ParseError;
pub use token::{split, strip_outer, LogicOp, Token};

pub(crate) use grammar::is_bare_number;
