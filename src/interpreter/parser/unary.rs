use crate::{
    ast::{Expr, FunctionCall, Identifier, UnaryOperator},
    interpreter::{
        lexer::{Number, TokenKind},
        parser::{
            binary::parse_expr_complement,
            core::{ParseResult, TokenStream, unexpected},
            utils::{parse_comma_separated, parse_var},
        },
    },
};

/// Parses a factor, the tightest-binding level of the grammar.
///
/// Grammar:
/// ```text
/// factor := ("+" | "-") factor
///         | "(" expr_complement ")"
///         | var
///         | function_call
///         | INT | FLOAT | BOOL
/// ```
///
/// Unary signs recurse on `factor`, so `- -x` parses as `-(-x)`. An
/// identifier is a call when the token after it is `(`, and a variable
/// otherwise.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the factor.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start a factor.
/// - `UnexpectedEndOfInput` if the stream ends.
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.next("an expression")?;
    let position = token.position;

    match &token.kind {
        TokenKind::Identifier(name) => {
            let name = name.clone();
            if let Some(paren) = tokens.next_if(&TokenKind::LParen)? {
                tokens.rollback(paren);
                tokens.rollback(token);
                return Ok(Expr::Call(parse_function_call(tokens)?));
            }
            Ok(Expr::Var(Identifier::new(name, position)))
        },
        TokenKind::Number(Number::Int(value)) => Ok(Expr::Int { value: *value,
                                                                position }),
        TokenKind::Number(Number::Float(value)) => Ok(Expr::Float { value: *value,
                                                                    position }),
        TokenKind::Bool(value) => Ok(Expr::Bool { value: *value,
                                                  position }),
        TokenKind::LParen => {
            let inner = parse_expr_complement(tokens)?;
            tokens.expect(&TokenKind::RParen)?;
            Ok(inner)
        },
        TokenKind::Plus | TokenKind::Minus => {
            let op = if token.kind == TokenKind::Plus {
                UnaryOperator::Plus
            } else {
                UnaryOperator::Minus
            };
            let operand = parse_factor(tokens)?;
            Ok(Expr::Unary { op,
                             operand: Box::new(operand),
                             position })
        },
        _ => Err(unexpected("an expression", &token)),
    }
}

/// Parses a call of the form `name(arg1, arg2, ...)`.
///
/// Grammar: `function_call := var "(" (expr_complement ("," expr_complement)*)?
/// ")"`
///
/// # Errors
/// Returns a `ParseError` if the callee, the parentheses or any argument is
/// malformed.
pub fn parse_function_call(tokens: &mut TokenStream<'_>) -> ParseResult<FunctionCall> {
    let callee = parse_var(tokens)?;

    tokens.expect(&TokenKind::LParen)?;
    let args = parse_comma_separated(tokens, parse_expr_complement)?;

    Ok(FunctionCall { callee, args })
}
