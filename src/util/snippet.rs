use std::fmt::Write;

use crate::ast::Position;

/// Renders the source line at `position` with a caret under its column.
///
/// The output has the form:
///
/// ```text
/// Error occurred at line <n>
///   <source line>
///   <padding>^
/// ```
///
/// Tabs before the column are kept in the padding so the caret lines up in a
/// terminal. If the position lies past the last line only the header is
/// rendered.
///
/// # Example
/// ```
/// use amython::{ast::Position, util::snippet::render};
///
/// let source = "PROGRAM demo {\n  x = !\n}";
/// let snippet = render(source, Position::new(2, 7));
///
/// assert_eq!(snippet, "Error occurred at line 2\n    x = !\n        ^");
/// ```
#[must_use]
pub fn render(source: &str, position: Position) -> String {
    let mut out = format!("Error occurred at line {}", position.line);

    if let Some(line) = source.lines().nth(position.line.saturating_sub(1)) {
        let line = line.trim_end_matches('\r');
        let prefix = line.get(..position.column.saturating_sub(1)).unwrap_or(line);
        let padding = prefix.chars()
                            .map(|c| if c == '\t' { '\t' } else { ' ' })
                            .collect::<String>();

        // Writing into a `String` cannot fail.
        let _ = write!(out, "\n  {line}\n  {padding}^");
    }

    out
}
