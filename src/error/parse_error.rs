use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is a `SyntaxError` at the language level and records the
/// position of the offending character or token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Invalid character '{character}' at {position}.")]
    InvalidCharacter {
        /// The character encountered.
        character: char,
        /// Where it was found.
        position:  Position,
    },
    /// A run of digits, dots and minus signs that is neither an integer nor a
    /// floating-point number (e.g. `3.1.4`).
    #[error("Invalid numeric '{literal}' at {position}.")]
    InvalidNumeric {
        /// The raw literal text.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// The source ended inside a `/* ... */` comment.
    #[error("Reaching end of file inside the comment opened at {position}.")]
    UnterminatedComment {
        /// Where the comment was opened.
        position: Position,
    },
    /// A specific token was required but another one was found.
    #[error("{expected} required but got {found} at {position}.")]
    UnexpectedToken {
        /// Description of what the grammar required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Position of the found token.
        position: Position,
    },
    /// An identifier at the start of a statement was followed by something
    /// other than `=` or `(`.
    #[error("Invalid token got: {found} at {position}, expected '=' or '('.")]
    InvalidStatement {
        /// The token following the identifier.
        found:    String,
        /// Position of that token.
        position: Position,
    },
    /// The source ended while the grammar still required a token.
    #[error("Reaching end of file: {expected} required after {position}.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar required.
        expected: String,
        /// Position of the last token read.
        position: Position,
    },
    /// Tokens remain after the closing brace of the program.
    #[error("Invalid content following '}}' at the end of the program: {found} at {position}.")]
    TrailingTokens {
        /// The first extra token.
        found:    String,
        /// Its position.
        position: Position,
    },
}

impl ParseError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::InvalidNumeric { position, .. }
            | Self::UnterminatedComment { position }
            | Self::UnexpectedToken { position, .. }
            | Self::InvalidStatement { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::TrailingTokens { position, .. } => Some(*position),
        }
    }
}
