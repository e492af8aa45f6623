use log::{debug, warn};

use crate::{
    ast::{Operand, Operator},
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        command::{Command, Outcome},
        evaluator::{accumulator::Accumulator, registers::RegisterBank},
        lexer::{Token, classify, split_words},
        value::rational::Rational,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Characters that may not end an expression.
const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// Stores the state of one calculator session.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every line, so that
/// registers and the accumulator carry over from one line to the next. Both
/// the interactive and the batch front end drive a `Context`.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// The 26 named registers.
    pub registers:   RegisterBank,
    /// The running value of the most recent expression.
    pub accumulator: Accumulator,
}

impl Context {
    /// Creates a session with zeroed registers and accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one classified line.
    ///
    /// # Errors
    /// Returns the error of [`Context::store`] or [`Context::eval_line`].
    pub fn execute(&mut self, command: Command<'_>) -> EvalResult<Outcome> {
        let result = match command {
            Command::Store(line) => self.store(line).map(Outcome::Stored),
            Command::Evaluate(line) => self.eval_line(line).map(Outcome::Value),
        };

        if let Err(err) = &result {
            warn!("{command:?} failed: {err}");
        }
        result
    }

    /// Evaluates an expression strictly from left to right.
    ///
    /// The first operand is resolved, the accumulator is reset and set to it,
    /// and each following `operator operand` pair is applied in turn. A
    /// failure part-way through leaves the accumulator at the partial result.
    ///
    /// # Errors
    /// - `ParseError` for empty input, a trailing operator, a missing
    ///   operand, an unknown operator or an unresolvable operand.
    /// - `RuntimeError::DivisionByZero` for division by zero, including a
    ///   literal such as `5/0`.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval_line("1/2 + 1/3").unwrap().to_string(), "5/6");
    /// assert_eq!(context.eval_line("1 + 2 * 3").unwrap().to_string(), "9");
    /// assert!(context.eval_line("1 +").is_err());
    /// ```
    pub fn eval_line(&mut self, line: &str) -> EvalResult<Rational> {
        if line.is_empty() {
            return Err(ParseError::EmptyExpression.into());
        }
        if line.ends_with(OPERATOR_CHARS) {
            return Err(ParseError::TrailingOperator { line: line.to_string() }.into());
        }

        let words = split_words(line);
        let (first, rest) = words.split_first().ok_or(ParseError::EmptyExpression)?;

        let value = self.resolve_operand(first)?;
        self.accumulator.reset();
        self.accumulator.add(&value);

        for pair in rest.chunks(2) {
            let &[operator, operand] = pair else {
                return Err(ParseError::MissingOperand { operator: pair[0].to_string() }.into());
            };

            let value = self.resolve_operand(operand)?;
            let operator = Self::parse_operator(operator)?;
            self.accumulator.apply(operator, &value)?;
        }

        let result = self.accumulator.current().clone();
        debug!("{line} = {result}");
        Ok(result)
    }

    /// Copies the accumulator into the register named by a `STORE` line.
    ///
    /// The line must consist of exactly two words, the second a single
    /// character.
    ///
    /// # Errors
    /// - `ParseError::MalformedStore` if the line does not have that shape.
    /// - `RuntimeError::InvalidRegister` if the character is not in `a..=z`.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.eval_line("7 / 3").unwrap();
    /// assert_eq!(context.store("STORE c").unwrap(), 'c');
    /// assert_eq!(context.eval_line("c").unwrap().to_string(), "7/3");
    ///
    /// assert!(context.store("STORE C").is_err());
    /// assert!(context.store("STORE ab").is_err());
    /// ```
    pub fn store(&mut self, line: &str) -> EvalResult<char> {
        let malformed = || ParseError::MalformedStore { command: line.to_string() };

        let words = split_words(line);
        let &[_, name] = words.as_slice() else {
            return Err(malformed().into());
        };

        let mut chars = name.chars();
        let (Some(register), None) = (chars.next(), chars.next()) else {
            return Err(malformed().into());
        };

        self.registers.store(register, self.accumulator.current().clone())?;
        debug!("stored {} in register '{register}'", self.accumulator.current());
        Ok(register)
    }

    /// Classifies a word in operand position.
    fn parse_operand(word: &str) -> EvalResult<Operand> {
        match classify(word) {
            Some(Token::Literal(text)) => {
                match text.parse::<Rational>() {
                    Ok(value) => Ok(Operand::Literal(value)),
                    Err(RuntimeError::DivisionByZero) => Err(RuntimeError::DivisionByZero.into()),
                    Err(_) => Err(ParseError::UnrecognizedToken { token: word.to_string() }.into()),
                }
            },
            Some(Token::Register(register)) => Ok(Operand::Register(register)),
            Some(Token::UppercaseRegister(register)) => {
                Err(ParseError::UppercaseRegister { register }.into())
            },
            Some(Token::Plus | Token::Minus | Token::Star | Token::Slash) => {
                Err(ParseError::ExpectedOperand { token: word.to_string() }.into())
            },
            None => Err(ParseError::UnrecognizedToken { token: word.to_string() }.into()),
        }
    }

    /// Resolves a word in operand position to a value.
    fn resolve_operand(&self, word: &str) -> EvalResult<Rational> {
        match Self::parse_operand(word)? {
            Operand::Literal(value) => Ok(value),
            Operand::Register(register) => {
                self.registers
                    .get(register)
                    .cloned()
                    .map_err(|_| ParseError::UnresolvedRegister { register }.into())
            },
        }
    }

    /// Classifies a word in operator position.
    fn parse_operator(word: &str) -> EvalResult<Operator> {
        classify(word).as_ref()
                      .and_then(Operator::from_token)
                      .ok_or_else(|| ParseError::UnknownOperator { token: word.to_string() }.into())
    }
}
