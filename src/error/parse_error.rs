use thiserror::Error;

/// Represents all errors that can occur during lexing or tree construction.
///
/// Every variant carries the `position` of the offending token, counted from
/// zero in the order the token source yields them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream ran out while an operand or operator was required.
    #[error("Error at token {position}: Expression ended unexpectedly.")]
    UnexpectedEndOfInput {
        /// Index of the token that was expected but missing.
        position: usize,
    },
    /// An operator token had no characters to take the operator from.
    #[error("Error at token {position}: Empty operator token.")]
    EmptyOperator {
        /// Index of the empty token.
        position: usize,
    },
    /// Found a token that cannot be accepted.
    ///
    /// Raised for input the lexer rejects, and in strict mode for operator
    /// tokens longer than one character.
    #[error("Error at token {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Index of the token.
        position: usize,
    },
    /// Found extra tokens after a complete expression (strict mode only).
    #[error("Error at token {position}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Index of the first extra token.
        position: usize,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Error at token {position}: Expression nests deeper than {limit} levels.")]
    TooDeep {
        /// The maximum depth that was allowed.
        limit:    usize,
        /// Index of the token that would have exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns `true` for errors meaning the expression itself is malformed:
    /// it ended early or contained an empty operator.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::error::ParseError;
    ///
    /// assert!(ParseError::UnexpectedEndOfInput { position: 2 }.is_malformed());
    /// assert!(!ParseError::TooDeep { limit: 8, position: 8 }.is_malformed());
    /// ```
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput { .. } | Self::EmptyOperator { .. })
    }

    /// Gets the token position from `self`.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::EmptyOperator { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::TooDeep { position, .. } => *position,
        }
    }
}
