/// The running value of an expression.
///
/// Holds the in-progress result and applies add, subtract, multiply and
/// divide to it in the order the evaluator supplies them.
pub mod accumulator;

/// Core evaluation logic and session state.
///
/// Contains the session `Context`, the left-to-right expression evaluator,
/// operand resolution, and the `STORE` command.
pub mod core;

/// The 26 named registers.
pub mod registers;
