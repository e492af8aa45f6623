/// Classification of input lines into commands.
///
/// Distinguishes `STORE` commands from expressions and recognizes the quit
/// word, so that every front end reads lines the same way.
pub mod command;
/// The evaluator module folds expressions into values.
///
/// The evaluator resolves operands through literals and registers, applies
/// operators to the accumulator strictly from left to right, and executes
/// store commands. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates expressions without operator precedence.
/// - Owns the registers and the accumulator of a session.
/// - Reports invalid expressions and division by zero.
pub mod evaluator;
/// The lexer module classifies the words of an input line.
///
/// A line is split on single spaces and each word is lexed into a fraction
/// literal, a register reference or an operator.
pub mod lexer;
/// The value module defines the runtime data type for evaluation.
///
/// # Responsibilities
/// - Defines `Rational`, an exact fraction in canonical form.
/// - Implements parsing, display and arithmetic.
pub mod value;
