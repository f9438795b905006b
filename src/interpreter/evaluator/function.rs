/// The `abs` function implementation.
///
/// Returns the magnitude of a number, keeping its integer or float kind.
pub mod abs;
/// Call dispatch and the built-in function table.
///
/// Resolves the callee, checks arity, sets up the new frame for user-defined
/// functions and lambdas, and routes built-ins to their implementations.
pub mod core;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of one or more arguments.
pub mod min_max;
/// The `print` function implementation.
///
/// Writes its arguments to the interpreter's output sink.
pub mod print;
/// The `sum` function implementation.
pub mod sum;
