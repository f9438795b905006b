use std::rc::Rc;

use crate::{
    ast::{FunctionDecl, Lambda, Position},
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::Builtin},
    util::num::{bool_to_i64, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Numbers and booleans are copied; functions and lambdas share their AST
/// node through an [`Rc`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer.
    Int(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// `True` or `False`. Promotes to `1`/`0` in arithmetic.
    Bool(bool),
    /// A function bound by a `def` statement.
    Function(Rc<FunctionDecl>),
    /// A lambda bound by an assignment.
    Lambda(Rc<Lambda>),
    /// One of the built-in functions.
    Builtin(Builtin),
    /// The marker bound to the program's declared name.
    Program(Rc<str>),
}

/// A value after boolean promotion, ready for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// An integer operand.
    Int(i64),
    /// A floating-point operand.
    Float(f64),
}

impl Numeric {
    /// Returns the operand as a float, promoting integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }

    /// Converts the operand back into a runtime value.
    #[must_use]
    pub const fn into_value(self) -> Value {
        match self {
            Self::Int(n) => Value::Int(n),
            Self::Float(x) => Value::Float(x),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns the name of the value's type as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Function(_) => "function",
            Self::Lambda(_) => "lambda",
            Self::Builtin(_) => "builtin_function",
            Self::Program(_) => "program",
        }
    }

    /// Promotes the value for arithmetic.
    ///
    /// Integers and floats pass through; booleans become `1` or `0`.
    /// Callables have no numeric form.
    ///
    /// # Example
    /// ```
    /// use amython::interpreter::value::core::{Numeric, Value};
    ///
    /// assert_eq!(Value::Bool(true).numeric(), Some(Numeric::Int(1)));
    /// assert_eq!(Value::Float(2.5).numeric(), Some(Numeric::Float(2.5)));
    /// ```
    #[must_use]
    pub fn numeric(&self) -> Option<Numeric> {
        match self {
            Self::Int(n) => Some(Numeric::Int(*n)),
            Self::Float(x) => Some(Numeric::Float(*x)),
            Self::Bool(b) => Some(Numeric::Int(bool_to_i64(*b))),
            Self::Function(_) | Self::Lambda(_) | Self::Builtin(_) | Self::Program(_) => None,
        }
    }

    /// Coerces the value to a boolean for `if` and `while` predicates.
    ///
    /// Booleans pass through; numbers are true when non-zero.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The truth value.
    /// - `Err(RuntimeError::TypeMismatch)`: For callables.
    pub fn truthy(&self, position: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Int(n) => Ok(*n != 0),
            Self::Float(x) => Ok(*x != 0.0),
            _ => Err(RuntimeError::TypeMismatch { details: format!("a '{}' value cannot be used as a condition",
                                                                   self.type_name()),
                                                  position }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Function(decl) => write!(f, "<function {}>", decl.name.name),
            Self::Lambda(lambda) => write!(f, "<lambda {}>", lambda.defining_name.name),
            Self::Builtin(builtin) => write!(f, "<built-in function {}>", builtin.name()),
            Self::Program(name) => write!(f, "<program {name}>"),
        }
    }
}
