//! Registration-array location.
//!
//! Finds a named array property inside the bracketed body that follows an
//! anchor token (`@NgModule` in practice) and computes where a new entry
//! belongs so the array stays sorted, one entry per line.

use regex::Regex;

use crate::brackets::step_over_brackets;
use crate::text::{leading_whitespace, start_of_line};

/// Default indent for an entry appended to the end of an array, where no
/// neighboring entry exists to copy from.
const DEFAULT_INDENT: &str = "    ";

/// A computed single-insertion edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInsertion {
    /// Absolute byte offset of the insertion point.
    pub offset: usize,
    /// The literal text to insert, indentation included.
    pub text: String,
}

/// Locate the insertion for `entry` in the `property` array of the
/// bracketed body following `anchor`.
///
/// Returns `None` when the anchor or the named array is absent, which
/// is a normal, reportable outcome. Existing entries are never reordered or
/// deduplicated; inserting a name that is already present produces a
/// second occurrence.
pub fn locate_array_insertion(
    text: &str,
    anchor: &str,
    property: &str,
    entry: &str,
) -> Option<ArrayInsertion> {
    let anchor_at = text.find(anchor)?;
    let body_start = anchor_at + anchor.len();
    let body_end = step_over_brackets(text, body_start);
    let body = &text[body_start..body_end];

    let property_finder = Regex::new(&format!(r"{}\s*:\s*\[", regex::escape(property)))
        .expect("escaped property pattern compiles");
    let array_open = property_finder.find(body)?.end() - 1;
    let array_close = step_over_brackets(body, array_open).saturating_sub(1);

    let interior_end = array_close.max(array_open + 1);
    let entries: Vec<&str> = body[array_open + 1..interior_end]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let slot = entries.iter().position(|existing| entry < *existing);

    let (offset_in_body, insert_text) = match slot {
        Some(index) => {
            // The new entry takes over the existing entry's indentation;
            // re-emitting the same whitespace keeps the pushed-down
            // neighbor's line unchanged.
            let existing_at = array_open + body[array_open..].find(entries[index])?;
            let indent = leading_whitespace(body, existing_at);
            (existing_at, format!("{},\n{}", entry, indent))
        }
        None => {
            // Append just before the closing bracket. When the bracket
            // leads its own line, insert at the line start so its
            // indentation is left as-is.
            let line_start = start_of_line(body, array_close);
            let indent_len = leading_whitespace(body, array_close).len();
            let offset = if line_start + indent_len == array_close {
                line_start
            } else {
                array_close
            };
            (offset, format!("{}{},\n", DEFAULT_INDENT, entry))
        }
    };

    Some(ArrayInsertion {
        offset: body_start + offset_in_body,
        text: insert_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: &str = "@NgModule";

    const MODULE: &str = "\
@NgModule({
    declarations: [
        AlphaComponent,
        GammaComponent,
    ],
    exports: [
    ],
    imports: [
        CommonModule,
    ],
})
export class TestModule {};
";

    fn apply(text: &str, insertion: &ArrayInsertion) -> String {
        let mut edited = text.to_string();
        edited.insert_str(insertion.offset, &insertion.text);
        edited
    }

    #[test]
    fn test_insert_before_later_entry() {
        let insertion =
            locate_array_insertion(MODULE, ANCHOR, "declarations", "BetaComponent").unwrap();
        let edited = apply(MODULE, &insertion);

        assert!(edited.contains(
            "    declarations: [\n        AlphaComponent,\n        BetaComponent,\n        GammaComponent,\n    ],"
        ));
    }

    #[test]
    fn test_append_after_last_entry_uses_default_indent() {
        let insertion =
            locate_array_insertion(MODULE, ANCHOR, "declarations", "ZetaComponent").unwrap();
        let edited = apply(MODULE, &insertion);

        assert!(edited.contains(
            "        GammaComponent,\n    ZetaComponent,\n    ],"
        ));
    }

    #[test]
    fn test_insert_into_empty_array() {
        let insertion =
            locate_array_insertion(MODULE, ANCHOR, "exports", "BetaComponent").unwrap();
        let edited = apply(MODULE, &insertion);

        assert!(edited.contains("    exports: [\n    BetaComponent,\n    ],"));
    }

    #[test]
    fn test_missing_anchor_is_not_found() {
        let text = "export const noop = [];\n";
        assert_eq!(
            locate_array_insertion(text, ANCHOR, "declarations", "BetaComponent"),
            None
        );
    }

    #[test]
    fn test_missing_property_is_not_found() {
        assert_eq!(
            locate_array_insertion(MODULE, ANCHOR, "entryComponents", "BetaComponent"),
            None
        );
    }

    #[test]
    fn test_duplicate_entries_are_not_suppressed() {
        let first = locate_array_insertion(MODULE, ANCHOR, "declarations", "BetaComponent").unwrap();
        let once = apply(MODULE, &first);
        let second = locate_array_insertion(&once, ANCHOR, "declarations", "BetaComponent").unwrap();
        let twice = apply(&once, &second);

        assert_eq!(twice.matches("BetaComponent,").count(), 2);
    }

    #[test]
    fn test_scenario_append_matches_neighbor_indent() {
        let text = "@Block({\n  declarations: [\n    Alpha,\n  ],\n})";
        let insertion = locate_array_insertion(text, "@Block", "declarations", "Beta").unwrap();
        let edited = apply(text, &insertion);

        assert!(edited.contains("Alpha,\n    Beta,\n  ],"));
    }

    #[test]
    fn test_unterminated_array_degrades_without_panicking() {
        let text = "@NgModule({\n    declarations: [\n";
        let insertion = locate_array_insertion(text, ANCHOR, "declarations", "BetaComponent");
        // Best-effort: the locator may produce a malformed insertion for
        // malformed input, but it must not fail hard.
        assert!(insertion.is_some());
    }
}
