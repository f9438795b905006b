use std::io::Write;

use crate::{
    ast::Position,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes the arguments to `output` on one line.
///
/// Arguments are rendered with their `Display` implementation and separated
/// by a single space. Any number of arguments is accepted; `print()` writes an
/// empty line.
///
/// # Returns
/// `None`: `print` produces no value.
///
/// # Example
/// ```
/// use amython::{
///     ast::Position,
///     interpreter::{evaluator::function::print::print, value::core::Value},
/// };
///
/// let mut out = Vec::new();
/// let result = print(&[Value::Int(42), Value::Float(0.5), Value::Bool(false)],
///                    &mut out,
///                    Position::new(1, 1)).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(String::from_utf8(out).unwrap(), "42 0.5 False\n");
/// ```
pub fn print(args: &[Value], output: &mut dyn Write, _: Position) -> EvalResult<Option<Value>> {
    let line = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    writeln!(output, "{line}")?;
    Ok(None)
}
