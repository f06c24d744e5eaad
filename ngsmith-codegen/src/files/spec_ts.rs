//! Unit-test spec file wrapper.

use std::path::{Path, PathBuf};

use ngsmith_core::ScaffoldFile;

/// A `<name>.spec.ts` file whose content was chosen by the spec
/// generator (see [`crate::spec`]) based on what the tested file exports.
pub struct SpecTs {
    pub file_name: String,
    pub content: String,
}

impl SpecTs {
    /// Spec file name for a TypeScript source file, e.g.
    /// `foo.component.ts` -> `foo.component.spec.ts`.
    pub fn file_name_for(source: &Path) -> Option<String> {
        let name = source.file_name()?.to_string_lossy();
        let base = name.strip_suffix(".ts")?;
        Some(format!("{}.spec.ts", base))
    }
}

impl ScaffoldFile for SpecTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
