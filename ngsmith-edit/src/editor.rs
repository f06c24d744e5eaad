//! The module editor and its buffer hosts.
//!
//! Locators compute byte offsets over plain text; this module owns the
//! only seam that touches a mutation API. The editor converts each
//! computed offset to the host's line/column addressing and requests one
//! insert-only edit per operation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ngsmith_core::{ensure_dot, relative_to};

use crate::error::{Error, Result};
use crate::imports::locate_import_insertion;
use crate::registry::locate_array_insertion;
use crate::text::{Position, offset_at, position_at};

/// Anchor token marking the registration block in a module file.
pub const NG_MODULE_ANCHOR: &str = "@NgModule";

/// A host owning text buffers the editor can read and mutate.
///
/// `read` returns the buffer's current content; it is called at the start
/// of every insertion request, so an edit applied by a previous request is
/// always observed. `insert` applies a single insert-only edit and may
/// decline it with `Ok(false)`.
pub trait BufferHost {
    fn read(&mut self, path: &Path) -> Result<String>;

    fn insert(&mut self, path: &Path, position: Position, text: &str) -> Result<bool>;
}

/// Buffer host backed by the filesystem.
#[derive(Debug, Default)]
pub struct FsHost;

impl BufferHost for FsHost {
    fn read(&mut self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn insert(&mut self, path: &Path, position: Position, text: &str) -> Result<bool> {
        let mut content = self.read(path)?;

        let Some(offset) = offset_at(&content, position) else {
            return Ok(false);
        };

        content.insert_str(offset, text);
        std::fs::write(path, content).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(true)
    }
}

/// In-memory buffer host for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryHost {
    buffers: HashMap<PathBuf, String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a buffer with content.
    pub fn load(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.buffers.insert(path.into(), content.into());
    }

    /// Current content of a buffer.
    pub fn text(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.buffers.get(path.as_ref()).map(String::as_str)
    }
}

impl BufferHost for MemoryHost {
    fn read(&mut self, path: &Path) -> Result<String> {
        self.buffers.get(path).cloned().ok_or_else(|| Error::Read {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn insert(&mut self, path: &Path, position: Position, text: &str) -> Result<bool> {
        let Some(content) = self.buffers.get_mut(path) else {
            return Ok(false);
        };
        let Some(offset) = offset_at(content, position) else {
            return Ok(false);
        };

        content.insert_str(offset, text);
        Ok(true)
    }
}

/// Structural editor bound to one registration module file.
///
/// Each operation re-reads the buffer, locates its insertion point, and
/// applies exactly one insert-only edit. Absence of the expected
/// structure resolves to `Ok(false)`, never an error; operations are
/// meant to be issued sequentially, each observing the previous edit.
pub struct ModuleEditor<H> {
    module_path: PathBuf,
    host: H,
}

impl<H: BufferHost> ModuleEditor<H> {
    /// Bind an editor to a module file, verifying once that the buffer
    /// can be opened at all.
    pub fn open(module_path: impl Into<PathBuf>, mut host: H) -> Result<Self> {
        let module_path = module_path.into();
        host.read(&module_path)?;

        Ok(Self { module_path, host })
    }

    /// The module file this editor is bound to.
    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    /// Insert an import statement for `class_names`, keeping imports of
    /// the same `suffix_group` sorted by their joined binding list.
    ///
    /// `unit_path` is the imported file's path without the `.ts`
    /// extension; it is embedded as a dot-prefixed path relative to the
    /// module file's directory. Returns `Ok(false)` when no insertion
    /// point exists or the host declines the edit.
    pub fn add_import(
        &mut self,
        class_names: &[String],
        unit_path: &Path,
        suffix_group: &str,
    ) -> Result<bool> {
        let mut names = class_names.to_vec();
        names.sort();
        let joined = names.join(", ");

        let text = self.host.read(&self.module_path)?;

        let Some(insertion) =
            locate_import_insertion(&text, suffix_group, &joined, NG_MODULE_ANCHOR)
        else {
            return Ok(false);
        };

        let module_dir = self.module_path.parent().unwrap_or(Path::new(""));
        let import_path = ensure_dot(&relative_to(module_dir, unit_path));
        let newlines = if insertion.extra_newline { "\n\n" } else { "\n" };
        let statement = format!("import {{{}}} from '{}';{}", joined, import_path, newlines);

        self.apply(&text, insertion.offset, &statement)
    }

    /// Insert `class_name` into the named array of the `@NgModule` block,
    /// keeping entries sorted. Returns `Ok(false)` when the block or the
    /// array is absent, or the host declines the edit.
    pub fn add_to_group(&mut self, group: &str, class_name: &str) -> Result<bool> {
        let text = self.host.read(&self.module_path)?;

        let Some(insertion) = locate_array_insertion(&text, NG_MODULE_ANCHOR, group, class_name)
        else {
            return Ok(false);
        };

        self.apply(&text, insertion.offset, &insertion.text)
    }

    fn apply(&mut self, text: &str, offset: usize, insert: &str) -> Result<bool> {
        let position = position_at(text, offset);
        self.host.insert(&self.module_path, position, insert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_PATH: &str = "src/app/app.module.ts";

    const MODULE: &str = "\
import {NgModule} from '@angular/core';
import {CommonModule} from '@angular/common';
import {AlphaComponent} from './alpha/alpha.component';

@NgModule({
    declarations: [
        AlphaComponent,
    ],
    exports: [
        AlphaComponent,
    ],
    imports: [
        CommonModule,
    ],
})
export class AppModule {};
";

    fn editor_with(content: &str) -> ModuleEditor<MemoryHost> {
        let mut host = MemoryHost::new();
        host.load(MODULE_PATH, content);
        ModuleEditor::open(MODULE_PATH, host).unwrap()
    }

    #[test]
    fn test_open_fails_on_missing_buffer() {
        let host = MemoryHost::new();
        assert!(ModuleEditor::open("missing.module.ts", host).is_err());
    }

    #[test]
    fn test_add_import_sorts_binding_names() {
        let mut editor = editor_with(MODULE);

        let added = editor
            .add_import(
                &["ZetaComponent".to_string(), "BetaComponent".to_string()],
                Path::new("src/app/beta/beta.component"),
                ".component",
            )
            .unwrap();

        assert!(added);
        let text = editor.host.text(MODULE_PATH).unwrap();
        assert!(text.contains(
            "import {BetaComponent, ZetaComponent} from './beta/beta.component';\n"
        ));
    }

    #[test]
    fn test_add_import_lands_between_sorted_statements() {
        let content = "\
import {AlphaComponent} from './alpha/alpha.component';
import {CharlieComponent} from './charlie/charlie.component';

@NgModule({})
";
        let mut editor = editor_with(content);

        editor
            .add_import(
                &["BravoComponent".to_string()],
                Path::new("src/app/bravo/bravo.component"),
                ".component",
            )
            .unwrap();

        let text = editor.host.text(MODULE_PATH).unwrap();
        let alpha = text.find("{AlphaComponent}").unwrap();
        let bravo = text.find("{BravoComponent}").unwrap();
        let charlie = text.find("{CharlieComponent}").unwrap();
        assert!(alpha < bravo && bravo < charlie);
    }

    #[test]
    fn test_add_import_new_group_gets_blank_line_before_anchor() {
        let mut editor = editor_with(MODULE);

        let added = editor
            .add_import(
                &["SpinDirective".to_string()],
                Path::new("src/app/spin.directive"),
                ".directive",
            )
            .unwrap();

        assert!(added);
        let text = editor.host.text(MODULE_PATH).unwrap();
        assert!(text.contains("import {SpinDirective} from './spin.directive';\n\n@NgModule"));
    }

    #[test]
    fn test_add_to_group_inserts_sorted() {
        let mut editor = editor_with(MODULE);

        let added = editor.add_to_group("declarations", "AardvarkComponent").unwrap();

        assert!(added);
        let text = editor.host.text(MODULE_PATH).unwrap();
        assert!(text.contains(
            "declarations: [\n        AardvarkComponent,\n        AlphaComponent,\n    ],"
        ));
    }

    #[test]
    fn test_missing_anchor_leaves_buffer_untouched() {
        let content = "export const plain = true;\n";
        let mut editor = editor_with(content);

        let import_added = editor
            .add_import(
                &["BetaComponent".to_string()],
                Path::new("src/app/beta/beta.component"),
                ".component",
            )
            .unwrap();
        let group_added = editor.add_to_group("declarations", "BetaComponent").unwrap();

        assert!(!import_added);
        assert!(!group_added);
        assert_eq!(editor.host.text(MODULE_PATH).unwrap(), content);
    }

    #[test]
    fn test_missing_group_fails_while_sibling_succeeds() {
        let mut editor = editor_with(MODULE);

        let entry_added = editor
            .add_to_group("entryComponents", "BetaComponent")
            .unwrap();
        let declaration_added = editor.add_to_group("declarations", "BetaComponent").unwrap();

        assert!(!entry_added);
        assert!(declaration_added);
    }

    #[test]
    fn test_sequential_operations_observe_prior_edits() {
        let mut editor = editor_with(MODULE);

        assert!(editor.add_to_group("declarations", "BetaComponent").unwrap());
        assert!(editor.add_to_group("declarations", "CharlieComponent").unwrap());

        let text = editor.host.text(MODULE_PATH).unwrap();
        assert!(text.contains(
            "declarations: [\n        AlphaComponent,\n    BetaComponent,\n    CharlieComponent,\n    ],"
        ));
    }

    #[test]
    fn test_duplicate_insertion_is_not_deduplicated() {
        let mut editor = editor_with(MODULE);

        assert!(editor.add_to_group("exports", "BetaComponent").unwrap());
        assert!(editor.add_to_group("exports", "BetaComponent").unwrap());

        let text = editor.host.text(MODULE_PATH).unwrap();
        let exports_at = text.find("exports:").unwrap();
        let imports_at = text.find("imports:").unwrap();
        let exports_body = &text[exports_at..imports_at];
        assert_eq!(exports_body.matches("BetaComponent,").count(), 2);
    }
}
