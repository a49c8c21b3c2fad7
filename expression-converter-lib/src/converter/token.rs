use crate::converter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// Maps a single structural character onto its token.
    ///
    /// Digits are not handled here since a number token may span several
    /// characters; the lexer accumulates those itself.
    pub fn from_char(character: char) -> Option<Token> {
        match character {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            _ => None,
        }
    }

    /// A 'value' is a token that represents an operand rather than structure.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// The operator this token stands for, if it stands for one.
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_token(self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_characters_map_to_tokens() {
        assert_eq!(Token::from_char('+'), Some(Token::Plus));
        assert_eq!(Token::from_char('-'), Some(Token::Dash));
        assert_eq!(Token::from_char('*'), Some(Token::Asterisk));
        assert_eq!(Token::from_char('/'), Some(Token::ForwardSlash));
        assert_eq!(Token::from_char('('), Some(Token::OpenParenthesis));
        assert_eq!(Token::from_char(')'), Some(Token::CloseParenthesis));
    }

    #[test]
    fn unknown_characters_map_to_nothing() {
        assert_eq!(Token::from_char('x'), None);
        assert_eq!(Token::from_char('7'), None);
        assert_eq!(Token::from_char(' '), None);
    }

    #[test]
    fn only_numbers_are_values() {
        assert!(Token::Number("42".to_string()).is_value());
        assert!(!Token::Plus.is_value());
        assert!(!Token::OpenParenthesis.is_value());
    }

    #[test]
    fn display_reproduces_source_characters() {
        assert_eq!(Token::Number("345".to_string()).to_string(), "345");
        assert_eq!(Token::ForwardSlash.to_string(), "/");
        assert_eq!(Token::CloseParenthesis.to_string(), ")");
    }
}
