use thiserror::Error;

use crate::{ast::Position, error::ErrorKind};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A name was not bound in any frame of the active chain.
    #[error("name '{name}' not found at {position}.")]
    UnknownName {
        /// The unbound name.
        name:     String,
        /// Where the name was referenced.
        position: Position,
    },
    /// The callee of a call resolved to something that cannot be called.
    #[error("'{name}' is not callable at {position}.")]
    NotCallable {
        /// The callee name.
        name:     String,
        /// Position of the callee.
        position: Position,
    },
    /// A user-defined function or lambda received the wrong number of
    /// arguments.
    #[error("number of formal params should match with real params when calling '{name}', required {required}, but got {found} at {position}.")]
    ArgumentCountMismatch {
        /// The declared name of the callee.
        name:     String,
        /// The number of formal parameters.
        required: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Position of the call.
        position: Position,
    },
    /// A built-in received an argument count outside its arity rule.
    #[error("{name} requires {expected} but got {found} at {position}.")]
    BuiltinArity {
        /// The built-in name.
        name:     &'static str,
        /// Human readable arity rule, e.g. `at least 1 argument`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// Position of the call.
        position: Position,
    },
    /// A value had a type the operation does not accept.
    #[error("{details} at {position}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details:  String,
        /// Where the operation happened.
        position: Position,
    },
    /// A call used as an expression produced no value.
    #[error("'{name}' did not return a value at {position}.")]
    MissingValue {
        /// The callee name.
        name:     String,
        /// Position of the call.
        position: Position,
    },
    /// Integer truncating division by zero.
    #[error("division by zero at {position}.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// Writing `print` output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Maps the error onto its language-level kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownName { .. } => ErrorKind::NameError,
            Self::ArgumentCountMismatch { .. } => ErrorKind::SyntaxError,
            Self::NotCallable { .. }
            | Self::BuiltinArity { .. }
            | Self::TypeMismatch { .. }
            | Self::MissingValue { .. } => ErrorKind::TypeError,
            Self::DivisionByZero { .. } => ErrorKind::ZeroDivisionError,
            Self::Output(_) => ErrorKind::IOError,
        }
    }

    /// Gets the source position the error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownName { position, .. }
            | Self::NotCallable { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::BuiltinArity { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::MissingValue { position, .. }
            | Self::DivisionByZero { position } => Some(*position),
            Self::Output(_) => None,
        }
    }
}
