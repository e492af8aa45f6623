//! # quotient
//!
//! quotient is an exact fraction calculator written in Rust.
//! Every value is a reduced fraction of two arbitrary-precision integers,
//! expressions are folded strictly from left to right, and results can be
//! kept in 26 registers named `a` through `z`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::rational::Rational,
};

/// Defines the operators and operands of an expression.
///
/// An expression is a flat sequence `operand (operator operand)*`; this
/// module declares the types those words are classified into.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while classifying,
/// evaluating or storing. It separates the "invalid expression" class from
/// arithmetic failures and maps both to the text shown to the user.
///
/// # Responsibilities
/// - Defines error enums for structural and arithmetic failures.
/// - Provides the short summaries printed by the front ends.
pub mod error;
/// Line-oriented front ends.
///
/// The interactive loop and the batch runner are thin adapters around one
/// shared evaluation `Context`, so both print identical results for the same
/// input and register state.
pub mod frontend;
/// Orchestrates expression evaluation.
///
/// This module ties together the lexer, the fraction value type, the
/// registers, the accumulator and the evaluator.
///
/// # Responsibilities
/// - Classifies input lines and their words.
/// - Folds expressions into exact fractions.
/// - Manages register and accumulator state across lines.
pub mod interpreter;
/// General utilities for parsing integer text.
pub mod util;

/// Evaluates a single expression in a fresh session.
///
/// All registers read as zero.
///
/// # Errors
/// Returns an error if the expression is invalid or divides by zero.
///
/// # Examples
/// ```
/// use quotient::evaluate;
///
/// assert_eq!(evaluate("2/4 * 3/6").unwrap().to_string(), "1/4");
/// assert_eq!(evaluate("a + 1").unwrap().to_string(), "1");
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert_eq!(err.summary(), "Division by zero");
/// ```
pub fn evaluate(expression: &str) -> EvalResult<Rational> {
    Context::new().eval_line(expression)
}
