//! Bracket-depth scanning.

fn is_open_bracket(byte: u8) -> bool {
    byte == b'{' || byte == b'(' || byte == b'['
}

fn is_closing_bracket(byte: u8) -> bool {
    byte == b'}' || byte == b')' || byte == b']'
}

/// Step over a bracketed region, returning the index just past the
/// matching closing bracket.
///
/// The byte at `at` must be `{`, `(`, or `[`; anything else returns `at`
/// unchanged. Nesting is tracked across all three bracket kinds with one
/// shared stack, and a closing bracket pops the stack regardless of which
/// opening kind it matches. The scan tolerates stray brackets inside
/// string literals this way instead of failing on them. An unterminated
/// region returns `text.len()`.
///
/// # Examples
///
/// ```
/// use ngsmith_edit::step_over_brackets;
///
/// let text = "{a:[1,2],b:(3)}";
/// assert_eq!(step_over_brackets(text, 0), text.len());
/// ```
pub fn step_over_brackets(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut at = at;

    if at < bytes.len() && is_open_bracket(bytes[at]) {
        let mut stack = vec![bytes[at]];
        at += 1;

        while !stack.is_empty() && at < bytes.len() {
            let byte = bytes[at];
            if is_open_bracket(byte) {
                stack.push(byte);
            } else if is_closing_bracket(byte) {
                stack.pop();
            }

            at += 1;
        }
    }

    at
}
