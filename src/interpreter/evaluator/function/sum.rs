use std::io::Write;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Numeric, Value},
    },
};

/// Adds up the arguments.
///
/// The total stays an integer while every argument is an integer or boolean
/// and switches to floating point as soon as a float is seen. Integer
/// addition wraps on overflow.
///
/// # Returns
/// - `Some(Value)`: The total.
/// - `Err(RuntimeError::TypeMismatch)`: If an argument is not a number.
///
/// # Example
/// ```
/// use amython::{
///     ast::Position,
///     interpreter::{evaluator::function::sum::sum, value::core::Value},
/// };
///
/// let at = Position::new(1, 1);
/// let mut out = Vec::new();
///
/// let ints = [Value::Int(1), Value::Int(2), Value::Bool(true)];
/// assert_eq!(sum(&ints, &mut out, at).unwrap(), Some(Value::Int(4)));
///
/// let mixed = [Value::Int(1), Value::Float(2.0)];
/// assert_eq!(sum(&mixed, &mut out, at).unwrap(), Some(Value::Float(3.0)));
/// ```
pub fn sum(args: &[Value], _: &mut dyn Write, position: Position) -> EvalResult<Option<Value>> {
    let mut total = Numeric::Int(0);

    for arg in args {
        let Some(number) = arg.numeric() else {
            return Err(RuntimeError::TypeMismatch { details: format!("'{}' is not a number and cannot be summed",
                                                                     arg.type_name()),
                                                    position });
        };

        total = match (total, number) {
            (Numeric::Int(a), Numeric::Int(b)) => Numeric::Int(a.wrapping_add(b)),
            _ => Numeric::Float(total.as_f64() + number.as_f64()),
        };
    }

    Ok(Some(total.into_value()))
}
