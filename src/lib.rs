//! # amython
//!
//! amython is a tree-walking interpreter for AMython, a small Python-inspired
//! scripting language. A program is a single named block:
//!
//! ```text
//! PROGRAM demo {
//!     def countdown(n) {
//!         while (n > 0) { print(n) n = n - 1 }
//!     }
//!     countdown(5)
//! }
//! ```
//!
//! The language has integers, floats and booleans, first-class functions and
//! lambdas, `if`/`else`, `while`, and the built-ins `print`, `min`, `max`,
//! `abs` and `sum`. Statements need no separators.
//!
//! ## Grammar
//!
//! ```text
//! program              := "PROGRAM" var block
//! block                := "{" statement* "}"
//! statement            := function_declaration | if_statement | while_statement
//!                       | return_statement | assign_statement | function_call
//! function_declaration := "def" var "(" (var ("," var)*)? ")" block
//! if_statement         := "if" "(" expr_complement ")" block "else" block
//! while_statement      := "while" "(" expr_complement ")" block
//! return_statement     := "return" expr_complement
//! assign_statement     := var "=" (expr_complement | lambda_expr)
//! lambda_expr          := "lambda" "(" (var ("," var)*)? ")" ":" block
//! function_call        := var "(" (expr_complement ("," expr_complement)*)? ")"
//! expr_complement      := expr (rel_op expr)?
//! expr                 := term (("+" | "-") term)*
//! term                 := factor (("*" | "/" | "//") factor)*
//! factor               := ("+" | "-") factor | INT | FLOAT | BOOL
//!                       | var | function_call | "(" expr_complement ")"
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent a program as a tree. The AST is built by the parser and walked by
/// the evaluator.
///
/// # Responsibilities
/// - Defines one node type per grammar production.
/// - Attaches line and column positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a program, and maps each onto a language-level [`ErrorKind`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions for diagnostics.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for AMython programs.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides entry points for parsing and running programs.
pub mod interpreter;
/// General utilities shared across phases.
///
/// # Responsibilities
/// - Numeric promotion between booleans, integers and floats.
/// - Rendering source snippets for diagnostics.
pub mod util;

/// Runs a program, writing `print` output to standard output.
///
/// # Errors
/// Returns the first syntax or runtime error. Nothing runs if the source
/// fails to parse.
///
/// # Examples
/// ```
/// use amython::{ErrorKind, interpret};
///
/// let source = "PROGRAM demo { x = 2 y = x * 3 }";
/// assert!(interpret(source).is_ok());
///
/// // Integer division by zero.
/// let err = interpret("PROGRAM demo { x = 1 / 0 }").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ZeroDivisionError);
/// ```
pub fn interpret(source: &str) -> Result<(), Error> {
    Interpreter::<std::io::Stdout>::default().interpret(source)
}
