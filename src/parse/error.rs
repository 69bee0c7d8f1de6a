use thiserror::Error;

use super::clause::ClauseFault;

/// Errors produced while evaluating rule text the grammar does not cover.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed clause '{clause}': {reason}")]
    MalformedClause { clause: String, reason: ClauseFault },

    #[error("brackets nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
