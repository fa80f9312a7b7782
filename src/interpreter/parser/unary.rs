use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, expect, peek, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. They nest, so `--x` is
/// `-(-x)` and `1+-1` is `1 + (-1)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let (token, position) = peek(tokens);
    let op = match token {
        Token::Plus => UnaryOperator::Plus,
        Token::Minus => UnaryOperator::Minus,
        _ => return parse_primary(tokens, depth),
    };

    tokens.next();
    let operand = parse_unary(tokens, descend(depth, *position)?)?;

    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       line: position.line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INT | STRING | IDENT | "(" expression ")"
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` naming "an expression" for any other token,
/// including keywords and the end of input.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let (token, position) = peek(tokens);
    let line = position.line;

    let expr = match token {
        Token::Integer(value) => Expr::NumberLiteral { value: *value,
                                                       line },
        Token::Text(value) => Expr::StringLiteral { value: value.clone(),
                                                    line },
        Token::Identifier(name) => Expr::VariableRef { name: name.clone(),
                                                       line },
        Token::LParen => return parse_grouping(tokens, depth),
        _ => return Err(unexpected("an expression", token, *position)),
    };

    tokens.next();
    Ok(expr)
}

/// Parses `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let position = expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, descend(depth, position)?)?;
    expect(tokens, &Token::RParen)?;

    Ok(expr)
}
