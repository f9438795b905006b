/// Binary operator evaluation logic.
///
/// Handles arithmetic with integer/float promotion, truncating and true
/// division, and the six comparisons.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the interpreter state, the statement and expression walkers and
/// the block rule that makes the last statement's value the block's value.
pub mod core;

/// Activation frames and the stack that links them.
///
/// Name resolution walks parent links, which need not follow the order frames
/// were pushed in.
pub mod frame;

/// Function evaluation.
///
/// Handles calls to user-defined functions, lambdas and the built-ins,
/// including frame setup and argument count checks.
pub mod function;
