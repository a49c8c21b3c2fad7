mod infix;

use crate::converter::error::ParseError;
use crate::converter::lexer;
use crate::converter::syntax::expression_tree;
use crate::converter::syntax::expression_tree::Node;

/// Parses a postfix expression string into an expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the postfix expression.
///
/// returns: The root of the equivalent expression tree.
pub fn parse_postfix(expression: &str) -> Result<Node, ParseError> {
    expression_tree::new_tree(lexer::tokenize(expression))
}

/// Parses an infix expression string into an expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression. May
///   contain spaces and parentheses.
///
/// returns: The root of the equivalent expression tree.
pub fn parse_infix(expression: &str) -> Result<Node, ParseError> {
    if lexer::tokenize(expression).next().is_none() {
        return Err(ParseError::MalformedExpression(
            "empty expression".to_string(),
        ));
    }
    infix::parse(expression)
}
