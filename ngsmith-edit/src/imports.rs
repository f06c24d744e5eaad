//! Import-block location.
//!
//! Finds where a new combined import statement belongs so that imports of
//! the same suffix group stay sorted by their binding-name list.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::next_line_start;

static IMPORT_FINDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+\{([^}]+)\}\s+from\s+['"]([^'"]+)['"]"#)
        .expect("import pattern compiles")
});

/// Where a new import statement should be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportInsertion {
    /// Byte offset of the insertion point.
    pub offset: usize,
    /// Whether a blank line should follow the inserted statement to
    /// separate a freshly started import block from the declaration
    /// below it.
    pub extra_newline: bool,
}

/// Locate the insertion point for a new import whose path ends with
/// `suffix_group`.
///
/// `bindings_joined` is the new statement's comma-joined, pre-sorted
/// binding list; ordering against existing statements is plain string
/// comparison on the joined text. When no import of the suffix group
/// exists yet, the statement goes immediately before `anchor` with an
/// extra blank line. Returns `None` when the anchor is also absent.
pub fn locate_import_insertion(
    text: &str,
    suffix_group: &str,
    bindings_joined: &str,
    anchor: &str,
) -> Option<ImportInsertion> {
    let mut insertion: Option<usize> = None;

    for captures in IMPORT_FINDER.captures_iter(text) {
        let statement = captures.get(0).expect("whole match");
        let bindings = &captures[1];
        let import_from = &captures[2];

        if !import_from.ends_with(suffix_group) {
            continue;
        }

        if bindings_joined < bindings {
            insertion = Some(statement.start());
            break;
        }

        // Tentatively land after this statement in case it stays the
        // last import of the group.
        insertion = Some(next_line_start(text, statement.end()));
    }

    match insertion {
        Some(offset) => Some(ImportInsertion {
            offset,
            extra_newline: false,
        }),
        None => text.find(anchor).map(|offset| ImportInsertion {
            offset,
            extra_newline: true,
        }),
    }
}
