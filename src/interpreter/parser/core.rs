use std::collections::VecDeque;

use crate::{
    ast::{Position, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::block::parse_program,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A pull-based token source with unlimited pushback.
///
/// Tokens are requested from the lexer only when the grammar needs them.
/// Rules that have to look past a token to choose between alternatives read
/// ahead and then hand the tokens back with [`TokenStream::rollback`]; the
/// next read returns the most recently rolled-back token first.
pub struct TokenStream<'src> {
    lexer:         Lexer<'src>,
    pending:       VecDeque<Token>,
    last_position: Position,
}

impl<'src> TokenStream<'src> {
    /// Wraps a lexer.
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self { lexer,
               pending: VecDeque::new(),
               last_position: Position::new(1, 1) }
    }

    /// Returns the next token, or `None` at the end of the input.
    ///
    /// # Errors
    /// Propagates lexing errors.
    pub fn try_next(&mut self) -> ParseResult<Option<Token>> {
        let token = match self.pending.pop_front() {
            Some(token) => Some(token),
            None => self.lexer.next_token()?,
        };

        if let Some(token) = &token {
            tracing::trace!(%token, "token");
            self.last_position = token.position;
        }

        Ok(token)
    }

    /// Returns the next token, failing if the input is exhausted.
    ///
    /// # Parameters
    /// - `expected`: What the grammar requires here, used in the
    ///   end-of-input error message.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no token remains.
    /// - Any lexing error.
    pub fn next(&mut self, expected: &str) -> ParseResult<Token> {
        self.try_next()?
            .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                              position: self.last_position, })
    }

    /// Puts a token back so that it is returned by the next read.
    pub fn rollback(&mut self, token: Token) {
        self.pending.push_front(token);
    }

    /// Consumes the next token, which must be of the given kind.
    ///
    /// Only the variant is compared; literal payloads are ignored.
    ///
    /// # Errors
    /// `UnexpectedToken` naming the required and the found token.
    pub fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        let expected = format!("'{kind}'");
        let token = self.next(&expected)?;

        if std::mem::discriminant(&token.kind) == std::mem::discriminant(kind) {
            Ok(token)
        } else {
            Err(unexpected(&expected, &token))
        }
    }

    /// Consumes the next token only if it is of the given kind.
    ///
    /// # Errors
    /// Propagates lexing errors.
    pub fn next_if(&mut self, kind: &TokenKind) -> ParseResult<Option<Token>> {
        match self.try_next()? {
            Some(token) if std::mem::discriminant(&token.kind) == std::mem::discriminant(kind) => {
                Ok(Some(token))
            },
            Some(token) => {
                self.rollback(token);
                Ok(None)
            },
            None => Ok(None),
        }
    }
}

/// Builds an `UnexpectedToken` error for `token`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str, token: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    format!("'{}'", token.kind),
                                  position: token.position, }
}

/// Builds the AST for a whole program.
///
/// # Example
/// ```
/// use amython::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let program = Parser::new(Lexer::new("PROGRAM demo { x = 1 }")).parse().unwrap();
///
/// assert_eq!(program.name.name, "demo");
/// assert_eq!(program.body.statements.len(), 1);
/// ```
pub struct Parser<'src> {
    tokens: TokenStream<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser reading tokens from `lexer`.
    #[must_use]
    pub fn new(lexer: Lexer<'src>) -> Self {
        Self { tokens: TokenStream::new(lexer) }
    }

    /// Parses the program and checks that nothing follows its closing brace.
    ///
    /// Grammar: `program := "PROGRAM" identifier block`
    ///
    /// # Errors
    /// Returns a `ParseError` for any syntax error, and `TrailingTokens` if
    /// input remains after the program.
    pub fn parse(mut self) -> ParseResult<Program> {
        let program = parse_program(&mut self.tokens)?;

        if let Some(token) = self.tokens.try_next()? {
            return Err(ParseError::TrailingTokens { found:    format!("'{}'", token.kind),
                                                    position: token.position, });
        }

        Ok(program)
    }
}
