use thiserror::Error;

/// Parsing errors.
///
/// Defines every structural problem the evaluator can find in a line before
/// or while folding it: empty input, a dangling operator, an unknown operator,
/// a word that is neither an operand nor an operator, or a malformed `STORE`
/// command. All of them belong to the user-facing "invalid expression" class.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the arithmetic and storage failures raised by the value types
/// themselves: division by zero, malformed fraction text and out-of-range
/// register identifiers.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while evaluating a line or executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The line is structurally invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line is well formed but its arithmetic or storage failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Returns the short text shown to the user inside the error brackets.
    ///
    /// Division by zero is reported as such; every other failure collapses to
    /// `Invalid expression`.
    ///
    /// # Example
    /// ```
    /// use quotient::error::{EvalError, ParseError, RuntimeError};
    ///
    /// let err = EvalError::from(RuntimeError::DivisionByZero);
    /// assert_eq!(err.summary(), "Division by zero");
    ///
    /// let err = EvalError::from(ParseError::EmptyExpression);
    /// assert_eq!(err.summary(), "Invalid expression");
    /// ```
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Runtime(RuntimeError::DivisionByZero) => "Division by zero",
            Self::Parse(_) | Self::Runtime(_) => "Invalid expression",
        }
    }

    /// Returns `true` for failures in the "invalid expression" class.
    #[must_use]
    pub const fn is_invalid_expression(&self) -> bool {
        !matches!(self, Self::Runtime(RuntimeError::DivisionByZero))
    }
}
