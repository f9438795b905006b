use crate::{
    ast::{BinaryOperator, Expr, Position},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_factor,
        },
    },
};

/// Parses an expression with at most one relational operator.
///
/// Comparisons do not chain: in `a < b < c` only `a < b` is consumed and the
/// second `<` is left for the enclosing rule, which rejects it.
///
/// Grammar: `expr_complement := expr ((">" | "<" | ">=" | "<=" | "==" | "!=")
/// expr)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
///
/// # Returns
/// The parsed expression, possibly wrapped in a relational `Expr::Binary`.
pub fn parse_expr_complement(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let left = parse_expr(tokens)?;

    if let Some((op, position)) = next_binary_operator(tokens, BinaryOperator::is_relational)? {
        let right = parse_expr(tokens)?;
        return Ok(binary(op, left, right, position));
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. The tree is
/// folded iteratively, so `2 - 3 - 1` parses as `(2 - 3) - 1`.
///
/// Grammar: `expr := term (("+" | "-") term)*`
pub fn parse_expr(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;

    while let Some((op, position)) =
        next_binary_operator(tokens, |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))?
    {
        let right = parse_term(tokens)?;
        left = binary(op, left, right, position);
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `//`.
///
/// Grammar: `term := factor (("*" | "/" | "//") factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens)?;

    while let Some((op, position)) = next_binary_operator(tokens, |op| {
                                         matches!(op,
                                                  BinaryOperator::Mul
                                                  | BinaryOperator::Div
                                                  | BinaryOperator::TrueDiv)
                                     })?
    {
        let right = parse_factor(tokens)?;
        left = binary(op, left, right, position);
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use amython::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::DoubleSlash),
///            Some(BinaryOperator::TrueDiv));
/// assert_eq!(token_to_binary_operator(&TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::DoubleSlash => Some(BinaryOperator::TrueDiv),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Consumes the next token if it is a binary operator accepted by `accept`.
///
/// Any other token is rolled back.
fn next_binary_operator(tokens: &mut TokenStream<'_>,
                        accept: impl Fn(BinaryOperator) -> bool)
                        -> ParseResult<Option<(BinaryOperator, Position)>> {
    let Some(token) = tokens.try_next()? else {
        return Ok(None);
    };

    match token_to_binary_operator(&token.kind) {
        Some(op) if accept(op) => Ok(Some((op, token.position))),
        _ => {
            tokens.rollback(token);
            Ok(None)
        },
    }
}

fn binary(op: BinaryOperator, left: Expr, right: Expr, position: Position) -> Expr {
    Expr::Binary { op,
                   left: Box::new(left),
                   right: Box::new(right),
                   position }
}
