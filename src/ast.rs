use std::fmt::Display;

use crate::interpreter::{lexer::Token, value::rational::Rational};

/// One of the four arithmetic operators.
///
/// Operators carry no precedence; an expression is folded strictly from left
/// to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl Operator {
    /// Returns the operator a token stands for, if any.
    #[must_use]
    pub const fn from_token(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// A word in operand position, before it is resolved to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A fraction literal such as `3` or `-7/2`.
    Literal(Rational),
    /// A register reference such as `a`.
    Register(char),
}
