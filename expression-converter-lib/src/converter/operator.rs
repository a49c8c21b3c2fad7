use crate::converter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Divide,
    Multiply,
    Add,
    Subtract,
}

impl Operator {
    pub fn token(&self) -> Token {
        match self {
            Operator::Divide => Token::ForwardSlash,
            Operator::Multiply => Token::Asterisk,
            Operator::Add => Token::Plus,
            Operator::Subtract => Token::Dash,
        }
    }

    pub fn from_token(token: &Token) -> Option<Operator> {
        match token {
            Token::ForwardSlash => Some(Operator::Divide),
            Token::Asterisk => Some(Operator::Multiply),
            Token::Plus => Some(Operator::Add),
            Token::Dash => Some(Operator::Subtract),
            _ => None,
        }
    }

    /// Position in the fixed split order `/ * + -`.
    ///
    /// A greater rank means looser binding, so when the infix parser searches
    /// for the operator to split an expression at, a candidate with a
    /// greater-or-equal rank beats the incumbent at the same bracket depth.
    pub(crate) fn split_rank(&self) -> usize {
        match self {
            Operator::Divide => 0,
            Operator::Multiply => 1,
            Operator::Add => 2,
            Operator::Subtract => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
