use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// How deeply expressions and statement bodies may nest.
///
/// Both the parser and the evaluator recurse once per level, so the limit
/// keeps them well inside the stack of a default thread.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Stands in for the lookahead once the token stream is exhausted.
static END_OF_INPUT: Spanned = (Token::Eof, Position { line: 0, column: 0 });

/// Returns the lookahead token without consuming it.
///
/// A stream that has run dry behaves as if it ended with [`Token::Eof`], so
/// callers never have to handle a missing token separately.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a Spanned
    where I: Iterator<Item = &'a Spanned>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Builds the error for a lookahead that does not fit the grammar.
///
/// # Parameters
/// - `expected`: What the grammar wanted, e.g. `"'thankyou'"`.
/// - `found`: The lookahead token.
/// - `position`: Where the lookahead starts.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: &Token,
                                                 position: Position)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found: found.describe(),
                                  position }
}

/// Steps one nesting level deeper.
///
/// Chains of binary operators count one level per operator, since they
/// fold into a tree that is just as deep.
///
/// # Returns
/// The new depth.
///
/// # Errors
/// Returns `NestingTooDeep` once the depth passes [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) const fn descend(depth: usize,
                                                    position: Position)
                                                    -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                position });
    }
    Ok(depth + 1)
}

/// Consumes the lookahead if it equals `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` when the lookahead is anything else.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a Spanned>
{
    let (token, position) = peek(tokens);
    if token != expected {
        return Err(unexpected(&format!("'{expected}'"), token, *position));
    }
    tokens.next();
    Ok(*position)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `UnexpectedToken` if the lookahead is not an identifier. Keywords
/// are never identifiers, so `call say 1` fails here.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Spanned>
{
    match peek(tokens) {
        (Token::Identifier(name), _) => {
            tokens.next();
            Ok(name.clone())
        },
        (token, position) => Err(unexpected("a variable name", token, *position)),
    }
}
