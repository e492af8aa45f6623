use crate::{error::RuntimeError, interpreter::value::rational::Rational};

/// Number of registers, one per lowercase ASCII letter.
pub const REGISTER_COUNT: usize = 26;

/// Twenty-six named fraction slots, `a` through `z`.
///
/// Every register starts at `0/1`. A register is overwritten by
/// [`RegisterBank::store`] and never removed.
#[derive(Debug, Clone)]
pub struct RegisterBank {
    slots: [Rational; REGISTER_COUNT],
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank {
    /// Creates a bank with every register set to zero.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| Rational::zero()) }
    }

    /// Maps a register identifier to its slot.
    fn index(register: char) -> Result<usize, RuntimeError> {
        if register.is_ascii_lowercase() {
            Ok(register as usize - 'a' as usize)
        } else {
            Err(RuntimeError::InvalidRegister { register })
        }
    }

    /// Overwrites a register.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidRegister` unless `register` is in
    /// `a..=z`.
    pub fn store(&mut self, register: char, value: Rational) -> Result<(), RuntimeError> {
        let index = Self::index(register)?;
        self.slots[index] = value;
        Ok(())
    }

    /// Reads a register. Registers that were never stored hold `0/1`.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidRegister` unless `register` is in
    /// `a..=z`.
    ///
    /// # Example
    /// ```
    /// use quotient::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::registers::RegisterBank, value::rational::Rational},
    /// };
    ///
    /// let mut bank = RegisterBank::new();
    /// assert_eq!(bank.get('z').unwrap(), &Rational::zero());
    ///
    /// bank.store('c', Rational::new(7, 3).unwrap()).unwrap();
    /// assert_eq!(bank.get('c').unwrap().to_string(), "7/3");
    ///
    /// assert_eq!(bank.get('C'), Err(RuntimeError::InvalidRegister { register: 'C' }));
    /// ```
    pub fn get(&self, register: char) -> Result<&Rational, RuntimeError> {
        Ok(&self.slots[Self::index(register)?])
    }
}
