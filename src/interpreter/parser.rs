/// Token plumbing shared by every grammar rule.
///
/// Defines `ParseResult`, the `TokenStream` (lexer plus a pushback deque) and
/// the `Parser` entry point that checks no input remains after the program.
pub mod core;

/// Program and block rules.
///
/// Parses `PROGRAM name { ... }` and braced statement lists.
pub mod block;

/// Statement rules.
///
/// Dispatches on the first token of a statement and parses assignments,
/// declarations, calls, conditionals, loops, returns and lambdas.
pub mod statement;

/// Binary operator rules.
///
/// Implements the relational, additive and multiplicative precedence levels.
pub mod binary;

/// Factor rules.
///
/// Parses literals, variables, calls, parenthesized expressions and unary
/// `+`/`-`.
pub mod unary;

/// Shared helpers for identifiers and comma-separated lists.
pub mod utils;
