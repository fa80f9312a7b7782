use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            binary::parse_comparison,
            statement::parse_statement,
            utils::{expect, peek, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token vector produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize) into a program.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use polite::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("hello please say 1 thankyou goodbye").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// let tokens = tokenize("hello 1+2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Program> {
    parse_program(&mut tokens.iter().peekable())
}

/// Parses a whole program.
///
/// The program must open with `hello`, close with `goodbye`, and nothing may
/// follow the `goodbye`. Statements are read until `goodbye` or the end of
/// input is seen; running out of input first is an error.
///
/// Grammar: `program := "hello" statement* "goodbye"`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed [`Program`].
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Spanned>
{
    expect(tokens, &Token::Hello)?;

    let mut statements = Vec::new();
    while !matches!(peek(tokens).0, Token::Goodbye | Token::Eof) {
        statements.push(parse_statement(tokens, 0)?);
    }

    expect(tokens, &Token::Goodbye)?;

    match peek(tokens) {
        (Token::Eof, _) => Ok(Program { statements }),
        (token, position) => Err(unexpected("end of input", token, *position)),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the `is` / `isnt` comparisons, and recursively
/// descends through the precedence hierarchy.
///
/// `depth` is the nesting level the expression starts at; see
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::utils::MAX_NESTING_DEPTH).
///
/// Grammar: `expression := comparison`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_comparison(tokens, depth)
}
