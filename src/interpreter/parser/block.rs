use crate::{
    ast::{Block, Program, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            statement::parse_statement,
            utils::parse_var,
        },
    },
};

/// Parses the program header and its body.
///
/// Grammar: `program := "PROGRAM" var block`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the source.
///
/// # Returns
/// The root `Program` node.
pub fn parse_program(tokens: &mut TokenStream<'_>) -> ParseResult<Program> {
    tokens.expect(&TokenKind::Program)?;
    let name = parse_var(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Program { name, body })
}

/// Parses a block delimited by braces.
///
/// Grammar: `block := "{" statement_list "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A `Block` containing all parsed statements.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Block> {
    tokens.expect(&TokenKind::LBrace)?;
    let statements = parse_statement_list(tokens)?;
    tokens.expect(&TokenKind::RBrace)?;

    Ok(Block { statements })
}

/// Parses statements until the closing brace of the enclosing block.
///
/// The closing brace itself is left in the stream. An empty list is accepted.
///
/// Grammar: `statement_list := statement*`
fn parse_statement_list(tokens: &mut TokenStream<'_>) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    loop {
        let token = tokens.next("'}'")?;
        let at_end = token.kind == TokenKind::RBrace;
        tokens.rollback(token);

        if at_end {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
