use crate::{
    ast::Identifier,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenStream, unexpected},
    },
};

/// Parses a comma-separated list terminated by `)`.
///
/// The opening `(` must already have been consumed. An immediately
/// encountered `)` produces an empty list; otherwise `parse_item` is called
/// for each element, and each element must be followed by either `,` or `)`.
///
/// Grammar (simplified): `list := (item ("," item)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `(`.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, a separator is missing,
/// or the input ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();

    if tokens.next_if(&TokenKind::RParen)?.is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        let token = tokens.next("',' or ')'")?;
        match token.kind {
            TokenKind::Comma => {},
            TokenKind::RParen => break,
            _ => return Err(unexpected("',' or ')'", &token)),
        }
    }

    Ok(items)
}

/// Parses a plain identifier.
///
/// Grammar: `var := ID`
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_var(tokens: &mut TokenStream<'_>)
                                                -> ParseResult<Identifier> {
    let token = tokens.next("identifier")?;

    match &token.kind {
        TokenKind::Identifier(name) => Ok(Identifier::new(name.clone(), token.position)),
        _ => Err(unexpected("identifier", &token)),
    }
}
