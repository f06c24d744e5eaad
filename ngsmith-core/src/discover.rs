//! Workspace discovery.
//!
//! Locates registration modules, TypeScript project roots, and BUILD files
//! by walking up from a starting directory. Walks never escape the
//! workspace root they were given.

use std::path::{Path, PathBuf};

use eyre::Result;
use regex::RegexBuilder;

/// Find every `*.module.ts` file in `start` and its ancestors, nearest
/// directory first. The walk stops once the next ancestor would leave
/// `root`.
pub fn find_modules(start: &Path, root: &Path) -> Result<Vec<PathBuf>> {
    let mut modules = Vec::new();
    let mut dir = start.to_path_buf();

    loop {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(".module.ts") && entry.file_type()?.is_file() {
                modules.push(entry.path());
            }
        }

        match dir.parent() {
            Some(parent) if parent.starts_with(root) => dir = parent.to_path_buf(),
            _ => break,
        }
    }

    Ok(modules)
}

/// Find the nearest ancestor directory containing a tsconfig file.
pub fn find_ts_project(file: &Path) -> Option<PathBuf> {
    let mut dir = file.parent()?;

    loop {
        if dir.join("tsconfig.json").exists() || dir.join("tsconfig.src.json").exists() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Find the nearest BUILD file at or above `dir`.
pub fn find_build(dir: &Path) -> Option<PathBuf> {
    let mut dir = dir;

    loop {
        let candidate = dir.join("BUILD");
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Find the primary exported class of a TypeScript file.
///
/// The expected class name is derived from the file stem: `foobar.ts`
/// exports `Foobar`-ish names, `foobar.component.ts` exports
/// `FoobarComponent`-ish names. The match is case-insensitive and the
/// returned name preserves the casing used in the file.
pub fn find_primary_export(path: &Path) -> Result<Option<String>> {
    let stem = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut expected = stem.strip_suffix(".ts").unwrap_or(&stem).to_string();

    if let Some(base) = expected.strip_suffix(".component") {
        expected = format!("{}component", base);
    }

    let text = std::fs::read_to_string(path)?;
    Ok(primary_export_in(&text, &expected))
}

fn primary_export_in(text: &str, expected_class_name: &str) -> Option<String> {
    let pattern = format!("export class ({})", regex::escape(expected_class_name));
    let finder = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped class name is a valid pattern");

    finder
        .captures(text)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_find_modules_nearest_first() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let nested = root.join("app").join("feature");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("app.module.ts"), "").unwrap();
        fs::write(root.join("app").join("shared.module.ts"), "").unwrap();
        fs::write(nested.join("feature.module.ts"), "").unwrap();
        fs::write(nested.join("feature.component.ts"), "").unwrap();

        let modules = find_modules(&nested, root).unwrap();

        assert_eq!(
            modules,
            vec![
                nested.join("feature.module.ts"),
                root.join("app").join("shared.module.ts"),
                root.join("app.module.ts"),
            ]
        );
    }

    #[test]
    fn test_find_modules_stops_at_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("workspace");
        fs::create_dir_all(&root).unwrap();
        fs::write(temp.path().join("outside.module.ts"), "").unwrap();

        let modules = find_modules(&root, &root).unwrap();

        assert!(modules.is_empty());
    }

    #[test]
    fn test_find_ts_project() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let nested = project.join("src").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(project.join("tsconfig.json"), "{}").unwrap();
        let file = nested.join("foo.ts");
        fs::write(&file, "").unwrap();

        assert_eq!(find_ts_project(&file), Some(project));
    }

    #[test]
    fn test_find_build() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("a").join("BUILD"), "").unwrap();

        assert_eq!(find_build(&nested), Some(temp.path().join("a").join("BUILD")));
    }

    #[test]
    fn test_primary_export_matches_expected_stem() {
        let text = "import {Component} from '@angular/core';\n\nexport class FooBarComponent {}\n";
        assert_eq!(
            primary_export_in(text, "foobarcomponent"),
            Some("FooBarComponent".to_string())
        );
    }

    #[test]
    fn test_primary_export_ignores_other_classes() {
        let text = "export class SomethingElse {}\n";
        assert_eq!(primary_export_in(text, "foobar"), None);
    }

    #[test]
    fn test_find_primary_export_reads_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("foobar.component.ts");
        fs::write(&file, "export class FoobarComponent {}\n").unwrap();

        assert_eq!(
            find_primary_export(&file).unwrap(),
            Some("FoobarComponent".to_string())
        );
    }
}
