use crate::converter::error::ParseError;
use crate::converter::token::Token;
use std::iter::Peekable;
use std::str::CharIndices;

/// Lazily yields the symbols of an expression string, each paired with the
/// byte index of its first character.
///
/// A symbol is either a run of consecutive digits, forming one number token,
/// or a single structural character. Spaces separate symbols and are never
/// yielded themselves.
pub struct Lexer<'a> {
    characters: Peekable<CharIndices<'a>>,
}

/// Iterates over the symbols in an expression string together with their
/// source indices.
///
/// # Arguments
///
/// * `text`: The text containing the symbols.
///
/// returns: A lazy iterator over `(token, index)` pairs.
pub fn tokenize_with_indices(text: &str) -> Lexer<'_> {
    Lexer {
        characters: text.char_indices().peekable(),
    }
}

/// The same stream as [`tokenize_with_indices`], with the indices dropped.
pub fn tokenize(text: &str) -> impl Iterator<Item = Result<Token, ParseError>> + '_ {
    tokenize_with_indices(text).map(|item| item.map(|(token, _)| token))
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(Token, usize), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(_, character)) = self.characters.peek() {
            if character != ' ' {
                break;
            }
            self.characters.next();
        }

        let (index, character) = self.characters.next()?;

        if character.is_ascii_digit() {
            let mut digits = String::from(character);
            while let Some(&(_, digit)) = self.characters.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                digits.push(digit);
                self.characters.next();
            }
            return Some(Ok((Token::Number(digits), index)));
        }

        match Token::from_char(character) {
            Some(token) => Some(Ok((token, index))),
            None => Some(Err(ParseError::UnexpectedCharacter { character, index })),
        }
    }
}
