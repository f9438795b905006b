use std::io::Write;

use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::{Numeric, Value},
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a unary `+` or `-`.
    ///
    /// Booleans are promoted to `1`/`0`, so `-True` is `-1`. Integer negation
    /// wraps, which only matters for `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use amython::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Minus, &Value::Bool(true), at);
    /// assert_eq!(v.unwrap(), Value::Int(-1));
    ///
    /// let v = Interpreter::<Vec<u8>>::eval_unary(UnaryOperator::Plus, &Value::Float(2.5), at);
    /// assert_eq!(v.unwrap(), Value::Float(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        let Some(operand) = value.numeric() else {
            return Err(RuntimeError::TypeMismatch { details: format!("bad operand type for unary {op}: '{}'",
                                                                     value.type_name()),
                                                    position });
        };

        let result = match (op, operand) {
            (UnaryOperator::Plus, _) => operand,
            (UnaryOperator::Minus, Numeric::Int(n)) => Numeric::Int(n.wrapping_neg()),
            (UnaryOperator::Minus, Numeric::Float(x)) => Numeric::Float(-x),
        };

        Ok(result.into_value())
    }
}
