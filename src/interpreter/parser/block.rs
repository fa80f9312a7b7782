use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, statement::parse_statement, utils::peek},
    },
};

/// Parses the statements following `naturally`.
///
/// Statements are collected for as long as the lookahead is `please`. The
/// body therefore stops in front of the `thankyou` closing the enclosing
/// conditional or loop, and never consumes it.
///
/// Grammar: `body := statement*`
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut statements = Vec::new();

    while let (Token::Please, _) = peek(tokens) {
        statements.push(parse_statement(tokens, depth)?);
    }

    Ok(statements)
}
