use thiserror::Error;
use tracing::warn;

/// Represents the non-fatal conditions reported while evaluating a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalWarning {
    /// An internal node held an operator outside `+ - * / ^`.
    ///
    /// The node is evaluated as an addition of its two operands.
    #[error("Unrecognized operator {operator} treated as +.")]
    UnrecognizedOperator {
        /// The offending operator character.
        operator: char,
    },
}

impl EvalWarning {
    /// Emits the warning as a `tracing` warning event.
    pub fn log(&self) {
        warn!("{self}");
    }
}
