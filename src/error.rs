/// Lexing and parsing errors.
///
/// Defines every failure that can be raised before evaluation starts: invalid
/// characters, malformed numeric literals, unterminated comments, unexpected
/// tokens and trailing input. All of them are reported as `SyntaxError`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors raised while walking the AST: unbound names, calls to
/// non-callable values, arity mismatches, unsupported operands and integer
/// division by zero.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// The language-level category of an error.
///
/// Every [`Error`] maps onto exactly one kind. The kind is what a driver shows
/// in front of the message, e.g. `NameError: name 'x' not found.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token stream, wrong token, trailing input or call arity
    /// mismatch.
    SyntaxError,
    /// Lookup of an unbound identifier.
    NameError,
    /// Calling a non-callable value, wrong built-in argument count, or an
    /// operand of the wrong type.
    TypeError,
    /// Integer truncating division by zero.
    ZeroDivisionError,
    /// The `print` output sink failed.
    IOError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SyntaxError => "SyntaxError",
            Self::NameError => "NameError",
            Self::TypeError => "TypeError",
            Self::ZeroDivisionError => "ZeroDivisionError",
            Self::IOError => "IOError",
        };
        write!(f, "{name}")
    }
}

/// Any error produced while interpreting a program.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the language-level kind of this error.
    ///
    /// # Example
    /// ```
    /// use amython::{error::ErrorKind, interpret};
    ///
    /// let err = interpret("PROGRAM demo { print(y) }").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NameError);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::SyntaxError,
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the source position the error points at, if known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
