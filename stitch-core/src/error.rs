use crate::QueryKind;
use std::error::Error as StdError;
use thiserror::Error;

type Source = Box<dyn StdError + Send + Sync + 'static>;

/// Failures raised while turning a query assembly into a bound statement.
///
/// They travel inside the crate wide [`Error`](crate::Error), use
/// `error.downcast_ref::<StatementError>()` to inspect them.
#[derive(Debug, Error)]
pub enum StatementError {
    /// An output parameter declaration was found while binding a non callable statement.
    #[error(
        "Output parameter of type `{type_name}` at position {position} requires a callable statement"
    )]
    InvalidParameterType {
        position: u64,
        type_name: &'static str,
    },
    /// The driver refused to prepare the statement.
    #[error("Could not prepare the {kind} statement `{sql}`")]
    Preparation {
        kind: QueryKind,
        sql: String,
        #[source]
        source: Source,
    },
    /// The driver refused a value at a given position.
    #[error("Could not bind {value} at position {position}")]
    Bind {
        position: u64,
        value: String,
        #[source]
        source: Source,
    },
}

impl StatementError {
    /// Position involved in the failure, if any.
    pub fn position(&self) -> Option<u64> {
        match self {
            StatementError::InvalidParameterType { position, .. }
            | StatementError::Bind { position, .. } => Some(*position),
            StatementError::Preparation { .. } => None,
        }
    }
}
