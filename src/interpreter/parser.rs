use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression and requires end of input afterwards.
///
/// This is the entry point for expression parsing. An expression is an
/// integer literal, optionally followed by a chain of operators and further
/// integer literals. The operator category (additive or multiplicative) is
/// fixed by the first operator after the first integer; once chosen, only
/// operators from that category continue the chain.
///
/// Grammar:
/// ```text
/// expression := INTEGER (("join" | "leave") INTEGER)*
///             | INTEGER (("group" | "split") INTEGER)*
/// ```
///
/// Any token left over once the chain ends is an error, so an expression
/// like `2 join 3 group 4` is rejected rather than partially evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `source`: The full input line, for error reporting.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if an integer literal is missing where one is
///   required.
/// - `UnexpectedEndOfInput` if the line ends after an operator.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = parse_integer_literal(tokens, source)?;

    let additive = match tokens.peek() {
        Some((token, _)) => {
            token_to_binary_operator(token).is_some_and(BinaryOperator::is_additive)
        },
        None => return Ok(first),
    };

    let expr = parse_chain(tokens, source, first, additive)?;

    match tokens.next() {
        None => Ok(expr),
        Some((token, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token_text(token),
                                                       input:  source.to_string(),
                                                       offset: *offset, })
        },
    }
}

/// Parses a chain of same-category operators.
///
/// Handles left-associative chains of either the additive operators
/// (`join`, `leave`) or the multiplicative operators (`group`, `split`),
/// selected by the `additive` flag. The chain ends at the first token that
/// is not an operator of the chosen category; deciding what to do with that
/// token is up to the caller.
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `source`: The full input line, for error reporting.
/// - `left`: The already-parsed left operand the chain starts from.
/// - `additive`: Whether the chain accepts additive or multiplicative
///   operators.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed chain, left-associated.
fn parse_chain<'a, I>(tokens: &mut Peekable<I>,
                      source: &str,
                      mut left: Expr,
                      additive: bool)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, offset)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if op.is_additive() == additive => op,
            _ => break,
        };

        let offset = *offset;
        tokens.next(); // consume operator

        let right = parse_integer_literal(tokens, source)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                offset };
    }

    Ok(left)
}

/// Parses a single integer literal.
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `source`: The full input line, for error reporting.
///
/// # Returns
/// An `Expr::Literal` node carrying the integer value.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not an integer.
/// - `UnexpectedEndOfInput` if there is no next token.
fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>, source: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), offset)) => Ok(Expr::Literal { value:  *value,
                                                                    offset: *offset, }),

        Some((token, offset)) => Err(ParseError::UnexpectedToken { token:  token_text(token),
                                                                   input:  source.to_string(),
                                                                   offset: *offset, }),

        None => Err(ParseError::UnexpectedEndOfInput { input: source.to_string(), }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of the four operator
/// words, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use wordcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Join),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Join => Some(BinaryOperator::Add),
        Token::Leave => Some(BinaryOperator::Sub),
        Token::Group => Some(BinaryOperator::Mul),
        Token::Split => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Renders a token back as the text it was matched from, for diagnostics.
fn token_text(token: &Token) -> String {
    match token {
        Token::Integer(value) => value.to_string(),
        other => token_to_binary_operator(other).map_or_else(String::new,
                                                             |op| op.word().to_string()),
    }
}
