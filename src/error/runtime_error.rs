use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors raised by fractions and registers.
pub enum RuntimeError {
    /// A fraction was built with a zero denominator, or divided by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Text did not match the fraction grammar.
    #[error("Invalid fraction format: '{text}'.")]
    InvalidFormat {
        /// The rejected text.
        text: String,
    },
    /// A register identifier outside `a..=z` was used.
    #[error("Register must be a letter from 'a' to 'z', found '{register}'.")]
    InvalidRegister {
        /// The rejected identifier.
        register: char,
    },
}
