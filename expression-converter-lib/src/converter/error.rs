use crate::converter::operator::Operator;
use thiserror::Error;

/// The ways in which building a tree from an expression string can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A postfix operator needed two operands but the stack held fewer.
    #[error("operator '{operator}' expects two operands but the stack ran out")]
    StackUnderflow { operator: Operator },

    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// A part of an infix expression that should hold an operand holds no
    /// symbols at all, e.g. the inside of `()`.
    #[error("expected an operand but found nothing")]
    EmptyOperand,

    #[error("unexpected character '{character}' at index {index}")]
    UnexpectedCharacter { character: char, index: usize },
}
