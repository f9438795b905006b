/// The evaluator module executes the syntax tree.
///
/// The evaluator walks a parsed program, maintains the frame stack, performs
/// arithmetic and comparisons, dispatches calls and writes `print` output.
///
/// # Responsibilities
/// - Evaluates statements and expressions, including block values.
/// - Resolves names through frame parent links.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens for keywords,
/// literals, identifiers, operators and delimiters, each tagged with its line
/// and column. Whitespace and block comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Reports invalid characters, malformed numbers and unterminated comments.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// A recursive-descent parser over a pull-based token stream with pushback.
/// It accepts exactly one `PROGRAM name { ... }` and nothing after it.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its textual form.
/// - Promotes booleans and integers for arithmetic.
/// - Coerces values to booleans for conditions.
pub mod value;
