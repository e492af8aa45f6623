use crate::interpreter::value::rational::Rational;

/// Prefix that turns a line into a store command. Case-sensitive.
pub const STORE_PREFIX: &str = "STORE ";
/// Word that ends an interactive session. Case-insensitive.
pub const QUIT_COMMAND: &str = "QUIT";

/// A line of input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `STORE <register>`: copy the accumulator into a register. Holds the
    /// full line.
    Store(&'a str),
    /// Anything else: an expression to evaluate.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::command::Command;
    ///
    /// assert_eq!(Command::parse("STORE a"), Command::Store("STORE a"));
    /// assert_eq!(Command::parse("store a"), Command::Evaluate("store a"));
    /// assert_eq!(Command::parse("1 + 2"), Command::Evaluate("1 + 2"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if line.starts_with(STORE_PREFIX) {
            Self::Store(line)
        } else {
            Self::Evaluate(line)
        }
    }

    /// Returns `true` for store commands.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Returns `true` if the line asks to leave the interactive loop.
#[must_use]
pub fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case(QUIT_COMMAND)
}

/// The result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The accumulator was stored in this register.
    Stored(char),
    /// An expression evaluated to this value.
    Value(Rational),
}
