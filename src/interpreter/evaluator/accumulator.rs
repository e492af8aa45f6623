use log::trace;

use crate::{ast::Operator, error::RuntimeError, interpreter::value::rational::Rational};

/// The running value an expression is folded into.
///
/// Starts at `0/1`. Each operation replaces the current value with
/// `current <op> operand`.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    value: Rational,
}

impl Accumulator {
    /// Creates an accumulator holding zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The running value.
    #[must_use]
    pub const fn current(&self) -> &Rational {
        &self.value
    }

    /// Sets the running value back to `0/1`.
    pub fn reset(&mut self) {
        self.value = Rational::zero();
    }

    /// Adds `operand` to the running value.
    pub fn add(&mut self, operand: &Rational) {
        self.value = &self.value + operand;
    }

    /// Subtracts `operand` from the running value.
    pub fn subtract(&mut self, operand: &Rational) {
        self.value = &self.value - operand;
    }

    /// Multiplies the running value by `operand`.
    pub fn multiply(&mut self, operand: &Rational) {
        self.value = &self.value * operand;
    }

    /// Divides the running value by `operand`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `operand` is zero; the
    /// running value is left unchanged.
    pub fn divide(&mut self, operand: &Rational) -> Result<(), RuntimeError> {
        self.value = self.value.checked_div(operand)?;
        Ok(())
    }

    /// Applies `operator` with `operand` to the running value.
    ///
    /// # Errors
    /// Propagates `RuntimeError::DivisionByZero` from [`Accumulator::divide`].
    ///
    /// # Example
    /// ```
    /// use quotient::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::accumulator::Accumulator, value::rational::Rational},
    /// };
    ///
    /// let mut acc = Accumulator::new();
    /// acc.apply(Operator::Add, &Rational::from(3)).unwrap();
    /// acc.apply(Operator::Div, &Rational::from(4)).unwrap();
    /// assert_eq!(acc.current().to_string(), "3/4");
    ///
    /// assert!(acc.apply(Operator::Div, &Rational::zero()).is_err());
    /// assert_eq!(acc.current().to_string(), "3/4");
    /// ```
    pub fn apply(&mut self, operator: Operator, operand: &Rational) -> Result<(), RuntimeError> {
        trace!("accumulator: {} {operator} {operand}", self.value);
        match operator {
            Operator::Add => self.add(operand),
            Operator::Sub => self.subtract(operand),
            Operator::Mul => self.multiply(operand),
            Operator::Div => self.divide(operand)?,
        }
        Ok(())
    }
}
