use std::{fmt::Display, ops, str::FromStr};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{error::RuntimeError, util::num::parse_integer};

/// An exact fraction of two arbitrary-precision integers.
///
/// A `Rational` is always stored in canonical form: the denominator is
/// strictly positive, the sign lives in the numerator, and numerator and
/// denominator share no common factor. Zero is stored as `0/1`. Every
/// operation returns a new value; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator:   BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Constructs a fraction from a numerator and a denominator and reduces it.
    ///
    /// Accepts anything convertible into a `BigInt`, so both machine integers
    /// and big integers can be passed.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `denominator` is zero.
    ///
    /// # Example
    /// ```
    /// use quotient::{error::RuntimeError, interpreter::value::rational::Rational};
    ///
    /// let half = Rational::new(3, -6).unwrap();
    /// assert_eq!(half.to_string(), "-1/2");
    ///
    /// assert_eq!(Rational::new(1, 0), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, RuntimeError> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(Self::reduce(numerator.into(), denominator))
    }

    /// Constructs a whole number `value/1`.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self { numerator:   value.into(),
               denominator: BigInt::one(), }
    }

    /// Returns `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    /// Normalizes sign and divides out the greatest common divisor.
    ///
    /// `denominator` must be nonzero.
    fn reduce(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        // gcd(0, d) == d, so zero comes out as 0/1.
        let divisor = numerator.gcd(&denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }

        Self { numerator, denominator }
    }

    /// The reduced numerator; carries the sign of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The reduced denominator; always strictly positive.
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if the fraction equals zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `other` equals zero, whatever
    /// text it was written as.
    ///
    /// # Example
    /// ```
    /// use quotient::{error::RuntimeError, interpreter::value::rational::Rational};
    ///
    /// let three_quarters: Rational = "3/4".parse().unwrap();
    /// let half: Rational = "1/2".parse().unwrap();
    /// assert_eq!(three_quarters.checked_div(&half).unwrap().to_string(), "3/2");
    ///
    /// let zero: Rational = "0/5".parse().unwrap();
    /// assert_eq!(half.checked_div(&zero), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn checked_div(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        Ok(Self::reduce(&self.numerator * &other.denominator,
                        &self.denominator * &other.numerator))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Display for Rational {
    /// Prints `numerator` for whole numbers and `numerator/denominator`
    /// otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = RuntimeError;

    /// Parses `N`, `N/D`, with an optional `-` on either part.
    ///
    /// # Example
    /// ```
    /// use quotient::{error::RuntimeError, interpreter::value::rational::Rational};
    ///
    /// let r: Rational = "3/-6".parse().unwrap();
    /// assert_eq!(r.to_string(), "-1/2");
    ///
    /// assert!(matches!("abc".parse::<Rational>(), Err(RuntimeError::InvalidFormat { .. })));
    /// assert_eq!("1/0".parse::<Rational>(), Err(RuntimeError::DivisionByZero));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || RuntimeError::InvalidFormat { text: text.to_string() };

        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = parse_integer(numerator).ok_or_else(invalid)?;
                let denominator = parse_integer(denominator).ok_or_else(invalid)?;
                Self::new(numerator, denominator)
            },
            None => parse_integer(text).map(Self::from).ok_or_else(invalid),
        }
    }
}

impl ops::Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Rational {
        Rational::reduce(&self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
                         &self.denominator * &rhs.denominator)
    }
}

impl ops::Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Rational {
        Rational::reduce(&self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
                         &self.denominator * &rhs.denominator)
    }
}

impl ops::Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Rational {
        Rational::reduce(&self.numerator * &rhs.numerator,
                         &self.denominator * &rhs.denominator)
    }
}

impl ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational { numerator:   -&self.numerator,
                   denominator: self.denominator.clone(), }
    }
}

/// Implements an operator for owned operands by borrowing them.
macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl ops::$trait for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                ops::$trait::$method(&self, &rhs)
            }
        }

        impl ops::$trait<&Self> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self {
                ops::$trait::$method(&self, rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}
