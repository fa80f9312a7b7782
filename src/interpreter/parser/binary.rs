use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{descend, peek},
        },
    },
};

/// Parses `is` / `isnt` comparisons.
///
/// Comparisons bind loosest of all operators, so `a + b is c` parses as
/// `(a + b) is c`. Chains fold to the left: `a is b is c` is
/// `(a is b) is c`, which compares a boolean with `c`.
///
/// The rule is: `comparison := additive (("is" | "isnt") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_additive(tokens, depth)?;

    loop {
        let (token, position) = peek(tokens);
        let Some(op) = token_to_comparison_operator(token) else {
            break;
        };

        tokens.next();
        depth = descend(depth, *position)?;
        let right = parse_additive(tokens, depth)?;
        left = Expr::Comparison { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  line: position.line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens, depth)?;

    loop {
        let (token, position) = peek(tokens);
        let Some(op) = token_to_binary_operator(token).filter(|op| {
                                                          matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
                                                      })
        else {
            break;
        };

        tokens.next();
        depth = descend(depth, *position)?;
        let right = parse_multiplicative(tokens, depth)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line: position.line };
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_unary(tokens, depth)?;

    loop {
        let (token, position) = peek(tokens);
        let Some(op) = token_to_binary_operator(token).filter(|op| {
                                                          matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
                                                      })
        else {
            break;
        };

        tokens.next();
        depth = descend(depth, *position)?;
        let right = parse_unary(tokens, depth)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right),
                                line: position.line };
    }

    Ok(left)
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use polite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Is), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps `is` and `isnt` to their comparison operator.
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Is => Some(ComparisonOperator::Is),
        Token::Isnt => Some(ComparisonOperator::IsNot),
        _ => None,
    }
}
