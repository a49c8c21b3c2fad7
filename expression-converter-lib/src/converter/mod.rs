pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::converter::error::ParseError;
use crate::converter::syntax::expression_tree::ExpressionTree;
use crate::converter::token::Token;

/// Builds an expression tree from an infix expression.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_converter::converter::build_from_infix;
/// # use expression_converter::converter::error::ParseError;
///
/// # fn main() -> Result<(), ParseError> {
/// let tree = build_from_infix("2 + 3 * 4")?;
/// assert_eq!(tree.to_postfix(), "2 3 4 * +");
/// assert_eq!(tree.to_infix(), "(2 + (3 * 4))");
/// # Ok(()) }
/// ```
pub fn build_from_infix(expression: &str) -> Result<ExpressionTree, ParseError> {
    ExpressionTree::from_infix(expression)
}

/// Builds an expression tree from a postfix expression.
///
/// # Arguments
///
/// * `expression`: The text-representation of the postfix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_converter::converter::build_from_postfix;
/// # use expression_converter::converter::error::ParseError;
///
/// # fn main() -> Result<(), ParseError> {
/// let tree = build_from_postfix("2 3 + 4 *")?;
/// assert_eq!(tree.to_infix(), "((2 + 3) * 4)");
/// # Ok(()) }
/// ```
pub fn build_from_postfix(expression: &str) -> Result<ExpressionTree, ParseError> {
    ExpressionTree::from_postfix(expression)
}

/// Pretty-prints the given tokens with added whitespace.
///
/// Tokens are separated by single spaces, except that no space follows an
/// opening parenthesis or precedes a closing one, so `( 3 + 4 )` prints as
/// `(3 + 4)`.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut text = String::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        if let Some(previous) = previous {
            let joins_parenthesis = matches!(previous, Token::OpenParenthesis)
                || matches!(token, Token::CloseParenthesis);
            if !joins_parenthesis {
                text.push(' ');
            }
        }
        text.push_str(&token.to_string());
        previous = Some(token);
    }

    text
}
