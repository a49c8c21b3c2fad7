//! Converts arithmetic expressions between infix and postfix notation by way
//! of a binary expression tree.

pub mod converter;
