use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all structural errors found in an input line.
pub enum ParseError {
    /// The line was empty.
    #[error("Invalid expression: the expression is empty.")]
    EmptyExpression,
    /// The line ended with an operator character.
    #[error("Invalid expression: '{line}' ends with an operator.")]
    TrailingOperator {
        /// The offending line.
        line: String,
    },
    /// An operator was not followed by an operand.
    #[error("Invalid expression: operator '{operator}' has no operand.")]
    MissingOperand {
        /// The dangling operator word.
        operator: String,
    },
    /// A word in operator position is not one of `+ - * /`.
    #[error("Invalid expression: unknown operator '{token}'.")]
    UnknownOperator {
        /// The word found in operator position.
        token: String,
    },
    /// A word in operand position is an operator.
    #[error("Invalid expression: expected an operand but found '{token}'.")]
    ExpectedOperand {
        /// The word found in operand position.
        token: String,
    },
    /// A register was named with an uppercase letter.
    #[error("Invalid expression: register '{register}' must be lowercase.")]
    UppercaseRegister {
        /// The uppercase letter.
        register: char,
    },
    /// A register could not be read.
    #[error("Invalid expression: register '{register}' cannot be resolved.")]
    UnresolvedRegister {
        /// The register identifier.
        register: char,
    },
    /// A word is neither a literal, a register nor an operator.
    #[error("Invalid expression: unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The unrecognized word.
        token: String,
    },
    /// A `STORE` command did not have exactly one single-letter argument.
    #[error("Invalid expression: malformed store command '{command}'.")]
    MalformedStore {
        /// The full command line.
        command: String,
    },
}
