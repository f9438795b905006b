use std::io::Write;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Numeric, Value},
    },
};

/// Returns the absolute value of its single argument.
///
/// Integers stay integers and floats stay floats; a boolean is promoted to
/// `1` or `0` first. `abs` of `i64::MIN` wraps to itself.
///
/// # Example
/// ```
/// use amython::{
///     ast::Position,
///     interpreter::{evaluator::function::abs::abs, value::core::Value},
/// };
///
/// let at = Position::new(1, 1);
/// let mut out = Vec::new();
///
/// assert_eq!(abs(&[Value::Int(-4)], &mut out, at).unwrap(), Some(Value::Int(4)));
/// assert_eq!(abs(&[Value::Float(-0.5)], &mut out, at).unwrap(), Some(Value::Float(0.5)));
/// ```
pub fn abs(args: &[Value], _: &mut dyn Write, position: Position) -> EvalResult<Option<Value>> {
    let arg = args.first()
                  .ok_or_else(|| RuntimeError::BuiltinArity { name:     "abs",
                                                              expected: "exactly 1 argument".to_string(),
                                                              found:    0,
                                                              position, })?;

    let magnitude = match arg.numeric() {
        Some(Numeric::Int(n)) => Numeric::Int(n.wrapping_abs()),
        Some(Numeric::Float(x)) => Numeric::Float(x.abs()),
        None => {
            return Err(RuntimeError::TypeMismatch { details: format!("bad operand type for abs: '{}'",
                                                                     arg.type_name()),
                                                    position });
        },
    };

    Ok(Some(magnitude.into_value()))
}
