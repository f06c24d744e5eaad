//! Line-oriented helpers over plain text buffers.
//!
//! All offsets are byte offsets. The locators work entirely in offsets;
//! only the edit boundary converts to line/column positions.

/// Line/column address in a buffer, zero-based. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Offset of the first character of the line containing `at`.
pub fn start_of_line(text: &str, at: usize) -> usize {
    match text[..at.min(text.len())].rfind('\n') {
        Some(newline) => newline + 1,
        None => 0,
    }
}

/// Offset of the first character of the line after the one containing
/// `at`, or `text.len()` when no further line exists.
pub fn next_line_start(text: &str, at: usize) -> usize {
    match text[at.min(text.len())..].find('\n') {
        Some(newline) => at + newline + 1,
        None => text.len(),
    }
}

/// The run of spaces and tabs at the start of the line containing `at`.
pub fn leading_whitespace(text: &str, at: usize) -> &str {
    let line_start = start_of_line(text, at);
    let bytes = text.as_bytes();
    let mut line_end = line_start;

    while line_end < bytes.len() && (bytes[line_end] == b' ' || bytes[line_end] == b'\t') {
        line_end += 1;
    }

    &text[line_start..line_end]
}

/// Convert a byte offset to a line/column position.
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let column = offset - start_of_line(text, offset);

    Position { line, column }
}

/// Convert a line/column position back to a byte offset, or `None` when
/// the position lies outside the text.
pub fn offset_at(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;

    for _ in 0..position.line {
        let newline = text[line_start..].find('\n')?;
        line_start += newline + 1;
    }

    let line_end = next_line_start(text, line_start);
    let offset = line_start + position.column;

    (offset <= line_end && offset <= text.len()).then_some(offset)
}
