use crate::converter::error::ParseError;
use crate::converter::lexer;
use crate::converter::operator::Operator;
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::Token;

/// The best split point found so far while scanning a substring.
struct Candidate {
    operator: Operator,
    index: usize,
    depth: i32,
}

/// Parses an infix expression by splitting it at the loosest-binding operator
/// outside of brackets, then recursing into the text on either side of it.
///
/// When several operators tie at the shallowest bracket depth, the rightmost
/// one with the greatest split rank wins, which groups chains of
/// equal-precedence operators left to right.
pub(super) fn parse(text: &str) -> Result<Node, ParseError> {
    match find_split(text)? {
        Some(candidate) => {
            let left = parse(&text[..candidate.index])?;
            let right = parse(&text[candidate.index + 1..])?;
            Ok(Node::new_operation(candidate.operator, left, right))
        }
        None => parse_operand(text),
    }
}

fn find_split(text: &str) -> Result<Option<Candidate>, ParseError> {
    let mut depth: i32 = 0;
    let mut best: Option<Candidate> = None;

    for item in lexer::tokenize_with_indices(text) {
        let (token, index) = item?;
        match token {
            Token::OpenParenthesis => depth += 1,
            Token::CloseParenthesis => depth -= 1,
            token => {
                let operator = match token.operator() {
                    Some(operator) => operator,
                    None => continue,
                };
                let replaces_best = match &best {
                    None => true,
                    Some(current) if depth <= current.depth => {
                        // An operator in fewer brackets always wins; at an
                        // equal depth a same-or-looser binding wins, so the
                        // rightmost such operator ends up as the split point.
                        depth < current.depth
                            || operator.split_rank() >= current.operator.split_rank()
                    }
                    Some(_) => false,
                };
                if replaces_best {
                    best = Some(Candidate {
                        operator,
                        index,
                        depth,
                    });
                }
            }
        }
    }

    Ok(best)
}

/// A substring without any operator must be a single operand, possibly
/// wrapped in redundant parentheses which are stripped.
fn parse_operand(text: &str) -> Result<Node, ParseError> {
    for item in lexer::tokenize(text) {
        if let Token::Number(digits) = item? {
            return Ok(Node::Operand(digits));
        }
    }
    Err(ParseError::EmptyOperand)
}
