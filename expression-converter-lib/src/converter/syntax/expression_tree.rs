use crate::converter::error::ParseError;
use crate::converter::operator::Operator;
use crate::converter::syntax::syntax_visitor::{walk_operation, SyntaxVisitor};
use crate::converter::token::Token;
use crate::converter::{parser, tokens_to_string};
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A vertex of an expression tree.
///
/// A leaf holds an operand and an interior node holds an operator together
/// with its two exclusively owned children; a node with exactly one child is
/// unrepresentable.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Operand(String),
    Operation {
        operator: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// An arithmetic expression stored as a binary tree.
///
/// This can be used to convert between infix and postfix expressions.
#[derive(Clone, PartialEq, Eq)]
pub struct ExpressionTree {
    root: Node,
}

impl ExpressionTree {
    /// Creates a tree from a postfix expression.
    ///
    /// # Arguments
    ///
    /// * `expression`: The expression, in postfix notation.
    ///
    /// returns: A tree representing the expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_converter::converter::syntax::expression_tree::ExpressionTree;
    /// # use expression_converter::converter::error::ParseError;
    ///
    /// # fn main() -> Result<(), ParseError> {
    /// let tree = ExpressionTree::from_postfix("3 4 +")?;
    /// assert_eq!(tree.to_infix(), "(3 + 4)");
    /// # Ok(()) }
    /// ```
    pub fn from_postfix(expression: &str) -> Result<ExpressionTree, ParseError> {
        let root = parser::parse_postfix(expression)?;
        Ok(ExpressionTree { root })
    }

    /// Creates a tree from an infix expression.
    ///
    /// # Arguments
    ///
    /// * `expression`: The expression, in infix notation. May contain spaces
    ///   and parentheses.
    ///
    /// returns: A tree representing the expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_converter::converter::syntax::expression_tree::ExpressionTree;
    /// # use expression_converter::converter::error::ParseError;
    ///
    /// # fn main() -> Result<(), ParseError> {
    /// let tree = ExpressionTree::from_infix("2 + 3 * 4")?;
    /// assert_eq!(tree.to_postfix(), "2 3 4 * +");
    /// # Ok(()) }
    /// ```
    pub fn from_infix(expression: &str) -> Result<ExpressionTree, ParseError> {
        let root = parser::parse_infix(expression)?;
        Ok(ExpressionTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Renders the expression in postfix notation, tokens separated by single
    /// spaces.
    pub fn to_postfix(&self) -> String {
        self.root.postfix_tokens().iter().join(" ")
    }

    /// Renders the expression in infix notation, with every operation wrapped
    /// in parentheses. A lone operand renders bare.
    pub fn to_infix(&self) -> String {
        tokens_to_string(&self.root.infix_tokens())
    }
}

impl Node {
    pub fn new_operand(digits: impl Into<String>) -> Node {
        Node::Operand(digits.into())
    }

    pub fn new_operation(operator: Operator, left: Node, right: Node) -> Node {
        Node::Operation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Node::Operand(_))
    }

    /// Tokens of this subtree in postfix order: left, right, then the node's
    /// own symbol.
    pub fn postfix_tokens(&self) -> Vec<Token> {
        let mut collector = PostfixCollector { tokens: vec![] };
        self.accept(&mut collector);
        collector.tokens
    }

    /// Tokens of this subtree in infix order, each operation wrapped in
    /// parentheses.
    pub fn infix_tokens(&self) -> Vec<Token> {
        let mut collector = InfixCollector { tokens: vec![] };
        self.accept(&mut collector);
        collector.tokens
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Operand(digits) => visitor.visit_operand(digits),
            Node::Operation {
                operator,
                left,
                right,
            } => visitor.visit_operation(operator, left, right),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

/// Builds an expression tree from a stream of postfix-ordered tokens.
///
/// Maintains a stack of already-built subtrees: operands push a leaf, while
/// an operator pops its right operand first and its left operand second,
/// pushing the combined operation back. The order of the pops matters since
/// subtraction and division are non-commutative.
///
/// # Arguments
///
/// * `tokens`: The token stream, in postfix order.
///
/// returns: The root of the built expression tree.
pub(crate) fn new_tree<I>(tokens: I) -> Result<Node, ParseError>
where
    I: IntoIterator<Item = Result<Token, ParseError>>,
{
    let mut operands: Vec<Node> = Vec::new();

    for token in tokens {
        let token = token?;
        if let Some(operator) = token.operator() {
            let right = operands
                .pop()
                .ok_or(ParseError::StackUnderflow { operator })?;
            let left = operands
                .pop()
                .ok_or(ParseError::StackUnderflow { operator })?;
            operands.push(Node::new_operation(operator, left, right));
        } else {
            match token {
                Token::Number(digits) => operands.push(Node::Operand(digits)),
                token => {
                    return Err(ParseError::MalformedExpression(format!(
                        "'{}' is not valid in postfix notation",
                        token
                    )))
                }
            }
        }
    }

    let root = operands
        .pop()
        .ok_or_else(|| ParseError::MalformedExpression("empty expression".to_string()))?;
    if !operands.is_empty() {
        return Err(ParseError::MalformedExpression(format!(
            "{} operand(s) left over without an operator",
            operands.len()
        )));
    }
    Ok(root)
}

struct PostfixCollector {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixCollector {
    fn visit_operand(&mut self, digits: &str) {
        self.tokens.push(Token::Number(digits.to_string()));
    }
    fn visit_operation(&mut self, operator: &Operator, left: &Node, right: &Node) {
        walk_operation(self, left, right);
        self.tokens.push(operator.token());
    }
}

struct InfixCollector {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for InfixCollector {
    fn visit_operand(&mut self, digits: &str) {
        self.tokens.push(Token::Number(digits.to_string()));
    }
    fn visit_operation(&mut self, operator: &Operator, left: &Node, right: &Node) {
        self.tokens.push(Token::OpenParenthesis);
        left.accept(self);
        self.tokens.push(operator.token());
        right.accept(self);
        self.tokens.push(Token::CloseParenthesis);
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_operand(&mut self, digits: &str) {
        self.builder.add_empty_child(digits.to_string());
    }
    fn visit_operation(&mut self, operator: &Operator, left: &Node, right: &Node) {
        self.builder.begin_child(operator.to_string());
        walk_operation(self, left, right);
        self.builder.end_child();
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand(digits) => write!(f, "{:?}", digits),
            Node::Operation { operator, .. } => write!(f, "{:?}", operator),
        }
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.root, f)
    }
}

impl Debug for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_postfix_tokens_return_correct_tree() {
        let tokens = create_simple_postfix_tokens();
        let expected_tree = create_simple_tree();

        let actual_tree = new_tree(tokens.into_iter().map(Ok)).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn complex_postfix_tokens_return_correct_tree() {
        let tokens = create_complex_postfix_tokens();
        let expected_tree = create_complex_tree();

        let actual_tree = new_tree(tokens.into_iter().map(Ok)).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn lone_operator_underflows_the_stack() {
        let error = new_tree([Ok(Token::Plus)].into_iter()).unwrap_err();

        assert_eq!(
            error,
            ParseError::StackUnderflow {
                operator: Operator::Add
            }
        );
    }

    #[test]
    fn operator_with_single_operand_underflows_the_stack() {
        let tokens = vec![Token::Number("3".to_string()), Token::Dash];

        let error = new_tree(tokens.into_iter().map(Ok)).unwrap_err();

        assert_eq!(
            error,
            ParseError::StackUnderflow {
                operator: Operator::Subtract
            }
        );
    }

    #[test]
    fn leftover_operands_are_malformed() {
        let tokens = vec![
            Token::Number("3".to_string()),
            Token::Number("4".to_string()),
        ];

        let error = new_tree(tokens.into_iter().map(Ok)).unwrap_err();

        assert!(matches!(error, ParseError::MalformedExpression(_)));
    }

    #[test]
    fn empty_token_stream_is_malformed() {
        let error = new_tree(std::iter::empty::<Result<Token, ParseError>>()).unwrap_err();

        assert!(matches!(error, ParseError::MalformedExpression(_)));
    }

    #[test]
    fn parenthesis_in_postfix_input_is_malformed() {
        let tokens = vec![Token::OpenParenthesis];

        let error = new_tree(tokens.into_iter().map(Ok)).unwrap_err();

        assert!(matches!(error, ParseError::MalformedExpression(_)));
    }

    #[test]
    fn simple_tree_converts_back_to_postfix_tokens() {
        let expected_tokens = create_simple_postfix_tokens();
        let tree = create_simple_tree();

        let actual_tokens = tree.postfix_tokens();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn complex_tree_converts_back_to_postfix_tokens() {
        let expected_tokens = create_complex_postfix_tokens();
        let tree = create_complex_tree();

        let actual_tokens = tree.postfix_tokens();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn simple_tree_converts_to_parenthesized_infix_tokens() {
        let tree = create_simple_tree();

        let actual_tokens = tree.infix_tokens();

        assert_eq!(
            actual_tokens,
            vec![
                Token::OpenParenthesis,
                Token::Number("3".to_string()),
                Token::Plus,
                Token::Number("4".to_string()),
                Token::CloseParenthesis,
            ]
        );
    }

    #[test]
    fn leaf_renders_as_bare_operand() {
        let tree = ExpressionTree {
            root: Node::new_operand("42"),
        };

        assert_eq!(tree.to_infix(), "42");
        assert_eq!(tree.to_postfix(), "42");
    }

    #[test]
    fn postfix_expression_renders_both_notations() {
        let tree = ExpressionTree::from_postfix("3 4 +").unwrap();

        assert_eq!(tree.to_infix(), "(3 + 4)");
        assert_eq!(tree.to_postfix(), "3 4 +");
    }

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        print!("{}", tree);
    }

    fn create_simple_tree() -> Node {
        let three = Node::new_operand("3");
        let four = Node::new_operand("4");
        Node::new_operation(Operator::Add, three, four)
    }

    fn create_simple_postfix_tokens() -> Vec<Token> {
        // 3 + 4 (but in postfix notation)
        vec![
            Token::Number("3".to_string()),
            Token::Number("4".to_string()),
            Token::Plus,
        ]
    }

    fn create_complex_postfix_tokens() -> Vec<Token> {
        // 1 + (2 + 3) * 4 (but in postfix notation)
        vec![
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Number("3".to_string()),
            Token::Plus,
            Token::Number("4".to_string()),
            Token::Asterisk,
            Token::Plus,
        ]
    }

    fn create_complex_tree() -> Node {
        let one = Node::new_operand("1");
        let two = Node::new_operand("2");
        let three = Node::new_operand("3");
        let four = Node::new_operand("4");
        let inner_sum = Node::new_operation(Operator::Add, two, three);
        let product = Node::new_operation(Operator::Multiply, inner_sum, four);
        Node::new_operation(Operator::Add, one, product)
    }
}
