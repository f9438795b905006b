use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, Identifier, Lambda, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::parse_expr_complement,
            block::parse_block,
            core::{ParseResult, TokenStream, unexpected},
            unary::parse_function_call,
            utils::{parse_comma_separated, parse_var},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function declaration (`def`).
/// - an if statement (`if`).
/// - a while loop (`while`).
/// - a return statement (`return`).
/// - an assignment (`name = ...`).
/// - a function call (`name(...)`).
///
/// Keywords dispatch directly. An identifier needs one more token of
/// lookahead: `=` selects an assignment, `(` a call, anything else is an
/// error.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let token = tokens.next("a statement")?;

    match &token.kind {
        TokenKind::Def => {
            tokens.rollback(token);
            parse_function_declaration(tokens)
        },
        TokenKind::If => {
            tokens.rollback(token);
            parse_if_statement(tokens)
        },
        TokenKind::While => {
            tokens.rollback(token);
            parse_while_statement(tokens)
        },
        TokenKind::Return => {
            tokens.rollback(token);
            parse_return_statement(tokens)
        },
        TokenKind::Identifier(_) => {
            let next = tokens.next("'=' or '('")?;
            let is_assignment = match next.kind {
                TokenKind::Assign => true,
                TokenKind::LParen => false,
                _ => {
                    return Err(ParseError::InvalidStatement { found:    format!("'{}'", next.kind),
                                                              position: next.position, });
                },
            };

            tokens.rollback(next);
            tokens.rollback(token);

            if is_assignment {
                parse_assign_statement(tokens)
            } else {
                Ok(Statement::Call(parse_function_call(tokens)?))
            }
        },
        _ => Err(unexpected("a statement", &token)),
    }
}

/// Parses an assignment, whose right-hand side may be a lambda.
///
/// Grammar: `assign_statement := var "=" (expr_complement | lambda_expr)`
///
/// The assignment target becomes the defining name of a lambda on the
/// right-hand side.
fn parse_assign_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let target = parse_var(tokens)?;
    tokens.expect(&TokenKind::Assign)?;

    let value = if tokens.next_if(&TokenKind::Lambda)?.is_some() {
        Expr::Lambda(Rc::new(parse_lambda_expr(tokens, target.clone())?))
    } else {
        parse_expr_complement(tokens)?
    };

    Ok(Statement::Assign { target, value })
}

/// Parses a function declaration.
///
/// Grammar: `function_declaration := "def" var "(" (var ("," var)*)? ")"
/// block`
///
/// # Errors
/// Returns a `ParseError` if the name, the parameter list or the body is
/// malformed.
fn parse_function_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&TokenKind::Def)?;
    let name = parse_var(tokens)?;

    tokens.expect(&TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_var)?;
    let body = parse_block(tokens)?;

    Ok(Statement::FunctionDecl(Rc::new(FunctionDecl { name, params, body })))
}

/// Parses an `if` statement. The `else` branch is mandatory and there is no
/// `elif` chaining.
///
/// Grammar: `if_statement := "if" "(" expr_complement ")" block "else" block`
fn parse_if_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&TokenKind::If)?;

    tokens.expect(&TokenKind::LParen)?;
    let predicate = parse_expr_complement(tokens)?;
    tokens.expect(&TokenKind::RParen)?;

    let then_branch = parse_block(tokens)?;
    tokens.expect(&TokenKind::Else)?;
    let else_branch = parse_block(tokens)?;

    Ok(Statement::If { predicate,
                       then_branch,
                       else_branch })
}

/// Parses a `while` loop.
///
/// Grammar: `while_statement := "while" "(" expr_complement ")" block`
fn parse_while_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    tokens.expect(&TokenKind::While)?;

    tokens.expect(&TokenKind::LParen)?;
    let predicate = parse_expr_complement(tokens)?;
    tokens.expect(&TokenKind::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::While { predicate, body })
}

/// Parses a `return` statement.
///
/// Grammar: `return_statement := "return" expr_complement`
fn parse_return_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let keyword = tokens.expect(&TokenKind::Return)?;
    let value = parse_expr_complement(tokens)?;

    Ok(Statement::Return { value,
                           position: keyword.position })
}

/// Parses the remainder of a lambda after its `lambda` keyword.
///
/// Grammar: `lambda_expr := "lambda" "(" (var ("," var)*)? ")" ":" block`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `lambda`.
/// - `defining_name`: The assignment target the lambda is bound to.
fn parse_lambda_expr(tokens: &mut TokenStream<'_>,
                     defining_name: Identifier)
                     -> ParseResult<Lambda> {
    tokens.expect(&TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_var)?;

    tokens.expect(&TokenKind::Colon)?;
    let body = parse_block(tokens)?;

    Ok(Lambda { defining_name,
                params,
                body })
}
