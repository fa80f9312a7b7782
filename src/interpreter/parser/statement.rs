use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            block::parse_body,
            core::{ParseResult, parse_expression},
            utils::{descend, expect, parse_identifier, peek},
        },
    },
};

/// Parses a single `please ... thankyou` command.
///
/// Between the two keywords a statement may be one of:
/// - an assignment (`call`),
/// - a conditional (`perchance`),
/// - a loop (`whilst`),
/// - an output statement (`say`),
/// - nothing at all,
/// - a bare expression.
///
/// The choice is made on the single lookahead token after `please`.
///
/// Grammar:
/// ```text
///     statement       := "please" inner_statement "thankyou"
///     inner_statement := assignment | conditional | whileloop | say
///                      | expression | ε
/// ```
///
/// `depth` counts the conditionals and loops enclosing the statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let line = expect(tokens, &Token::Please)?.line;

    let statement = match peek(tokens).0 {
        Token::Call => parse_assignment(tokens, depth)?,
        Token::Perchance => {
            let (test, body, line) = parse_guarded(tokens, &Token::Perchance, depth)?;
            Statement::Conditional { test, body, line }
        },
        Token::Whilst => {
            let (test, body, line) = parse_guarded(tokens, &Token::Whilst, depth)?;
            Statement::WhileLoop { test, body, line }
        },
        Token::Say => parse_say(tokens, depth)?,
        Token::Thankyou => Statement::NoOp { line },
        _ => Statement::Expression { expr: parse_expression(tokens, depth)?,
                                     line },
    };

    expect(tokens, &Token::Thankyou)?;
    Ok(statement)
}

/// Parses `call <name> <expression>`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let line = expect(tokens, &Token::Call)?.line;
    let name = parse_identifier(tokens)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::Assign { name, value, line })
}

/// Parses `say <expression>`.
fn parse_say<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned>
{
    let line = expect(tokens, &Token::Say)?.line;
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::Say { value, line })
}

/// Parses the shared shape of conditionals and loops:
/// `<keyword> <expression> naturally <statement>*`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `keyword`.
/// - `keyword`: Either `perchance` or `whilst`.
/// - `depth`: Nesting level of the statement; the body sits one deeper.
///
/// # Returns
/// The test expression, the body and the line of `keyword`.
fn parse_guarded<'a, I>(tokens: &mut Peekable<I>,
                        keyword: &Token,
                        depth: usize)
                        -> ParseResult<(Expr, Vec<Statement>, usize)>
    where I: Iterator<Item = &'a Spanned>
{
    let position = expect(tokens, keyword)?;
    let depth = descend(depth, position)?;
    let test = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Naturally)?;
    let body = parse_body(tokens, depth)?;

    Ok((test, body, position.line))
}
