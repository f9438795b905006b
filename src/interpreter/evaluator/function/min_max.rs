use std::io::Write;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Selects which extreme [`min_max`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// The smallest argument.
    Min,
    /// The largest argument.
    Max,
}

/// Returns the smallest or largest of the arguments.
///
/// Arguments are compared by their float-promoted values, but the argument
/// itself is returned unchanged, so `min(1, 1.0)` is `1` and `max(True, 0)`
/// is `True`. On ties the earliest argument wins.
///
/// # Parameters
/// - `extreme`: Whether to look for the minimum or the maximum.
/// - `args`: One or more arguments. Arity is checked by the caller.
/// - `position`: Position of the call for error reporting.
///
/// # Returns
/// - `Some(Value)`: The selected argument.
/// - `Err(RuntimeError::TypeMismatch)`: If an argument is not a number.
///
/// # Example
/// ```
/// use amython::{
///     ast::Position,
///     interpreter::{
///         evaluator::function::min_max::{Extreme, min_max},
///         value::core::Value,
///     },
/// };
///
/// let args = [Value::Int(3), Value::Float(1.5), Value::Int(2)];
/// let at = Position::new(1, 1);
///
/// assert_eq!(min_max(Extreme::Min, &args, at).unwrap(), Some(Value::Float(1.5)));
/// assert_eq!(min_max(Extreme::Max, &args, at).unwrap(), Some(Value::Int(3)));
/// ```
pub fn min_max(extreme: Extreme, args: &[Value], position: Position) -> EvalResult<Option<Value>> {
    let mut best: Option<(&Value, f64)> = None;

    for arg in args {
        let Some(number) = arg.numeric() else {
            return Err(RuntimeError::TypeMismatch { details: format!("'{}' is not a number and cannot be compared",
                                                                     arg.type_name()),
                                                    position });
        };
        let x = number.as_f64();

        let better = match best {
            None => true,
            Some((_, current)) => match extreme {
                Extreme::Min => x < current,
                Extreme::Max => x > current,
            },
        };

        if better {
            best = Some((arg, x));
        }
    }

    Ok(best.map(|(value, _)| value.clone()))
}

/// The `min` built-in.
pub fn min(args: &[Value], _: &mut dyn Write, position: Position) -> EvalResult<Option<Value>> {
    min_max(Extreme::Min, args, position)
}

/// The `max` built-in.
pub fn max(args: &[Value], _: &mut dyn Write, position: Position) -> EvalResult<Option<Value>> {
    min_max(Extreme::Max, args, position)
}
