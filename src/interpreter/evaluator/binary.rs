use std::io::Write;

use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::{Numeric, Value},
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a binary operation between two values.
    ///
    /// Booleans are promoted to `1`/`0` first. Arithmetic stays integral when
    /// both operands are integers and promotes to float otherwise. Integer
    /// arithmetic wraps on overflow.
    ///
    /// - `/` truncates toward zero on two integers and fails on a zero
    ///   divisor; with a float operand it is ordinary float division.
    /// - `//` always divides as floats, so `1 // 0` is `inf`.
    /// - Comparisons yield a boolean. Two integers compare exactly; a float
    ///   operand promotes both sides to float.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Returns
    /// - `Err(RuntimeError::TypeMismatch)` if either operand is callable.
    /// - `Err(RuntimeError::DivisionByZero)` for integer `/` by zero.
    ///
    /// # Example
    /// ```
    /// use amython::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let at = Position::new(1, 1);
    /// let eval = |op, l, r| Interpreter::<Vec<u8>>::eval_binary(op, &l, &r, at).unwrap();
    ///
    /// assert_eq!(eval(BinaryOperator::Div, Value::Int(-7), Value::Int(2)), Value::Int(-3));
    /// assert_eq!(eval(BinaryOperator::TrueDiv, Value::Int(7), Value::Int(2)), Value::Float(3.5));
    /// assert_eq!(eval(BinaryOperator::Add, Value::Bool(true), Value::Int(2)), Value::Int(3));
    /// assert_eq!(eval(BinaryOperator::Less, Value::Int(1), Value::Float(1.5)), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
        let (Some(l), Some(r)) = (left.numeric(), right.numeric()) else {
            return Err(RuntimeError::TypeMismatch { details: format!("unsupported operand types for {op}: '{}' and '{}'",
                                                                     left.type_name(),
                                                                     right.type_name()),
                                                    position });
        };

        let (a, b) = (l.as_f64(), r.as_f64());

        match op {
            BinaryOperator::Add => Ok(Self::arithmetic(l, r, i64::wrapping_add, |a, b| a + b)),
            BinaryOperator::Sub => Ok(Self::arithmetic(l, r, i64::wrapping_sub, |a, b| a - b)),
            BinaryOperator::Mul => Ok(Self::arithmetic(l, r, i64::wrapping_mul, |a, b| a * b)),
            BinaryOperator::Div => match (l, r) {
                (Numeric::Int(_), Numeric::Int(0)) => Err(RuntimeError::DivisionByZero { position }),
                (Numeric::Int(x), Numeric::Int(y)) => Ok(Value::Int(x.wrapping_div(y))),
                _ => Ok(Value::Float(a / b)),
            },
            BinaryOperator::TrueDiv => Ok(Value::Float(a / b)),
            BinaryOperator::Greater => Ok(Self::compare(l, r, i64::gt, f64::gt)),
            BinaryOperator::Less => Ok(Self::compare(l, r, i64::lt, f64::lt)),
            BinaryOperator::GreaterEqual => Ok(Self::compare(l, r, i64::ge, f64::ge)),
            BinaryOperator::LessEqual => Ok(Self::compare(l, r, i64::le, f64::le)),
            BinaryOperator::Equal => Ok(Self::compare(l, r, i64::eq, f64::eq)),
            BinaryOperator::NotEqual => Ok(Self::compare(l, r, i64::ne, f64::ne)),
        }
    }

    /// Applies `int_op` when both operands are integers and `float_op` on the
    /// promoted operands otherwise.
    fn arithmetic(l: Numeric,
                  r: Numeric,
                  int_op: fn(i64, i64) -> i64,
                  float_op: fn(f64, f64) -> f64)
                  -> Value {
        match (l, r) {
            (Numeric::Int(a), Numeric::Int(b)) => Value::Int(int_op(a, b)),
            _ => Value::Float(float_op(l.as_f64(), r.as_f64())),
        }
    }

    /// Compares two integers exactly, and promotes to float when either
    /// operand is a float.
    fn compare(l: Numeric,
               r: Numeric,
               int_cmp: fn(&i64, &i64) -> bool,
               float_cmp: fn(&f64, &f64) -> bool)
               -> Value {
        match (l, r) {
            (Numeric::Int(a), Numeric::Int(b)) => Value::Bool(int_cmp(&a, &b)),
            _ => Value::Bool(float_cmp(&l.as_f64(), &r.as_f64())),
        }
    }
}
