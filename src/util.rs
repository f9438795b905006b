/// Numeric conversion helpers.
///
/// Integer-to-float promotion is the one lossy conversion the interpreter
/// performs on purpose; it lives here so the cast is written down once.
pub mod num;
/// Source snippets for diagnostics.
///
/// Renders the offending source line with a caret under the failing column.
/// The driver prints the snippet above the error message; it is not part of
/// the error value itself.
pub mod snippet;
