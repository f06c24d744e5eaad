//! Relative path computation for generated import statements.
//!
//! Import paths embedded in TypeScript sources always use forward slashes
//! and start with `./` or `../`, regardless of the host platform.

use std::path::{Component, Path};

/// Compute the relative path from `from_dir` to `to`, forward-slash joined.
///
/// The computation is purely lexical; neither path is touched on disk.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ngsmith_core::relative_to;
///
/// assert_eq!(relative_to(Path::new("a/b"), Path::new("a/b/c.ts")), "c.ts");
/// assert_eq!(relative_to(Path::new("a/b"), Path::new("a/x/y.ts")), "../x/y.ts");
/// ```
pub fn relative_to(from_dir: &Path, to: &Path) -> String {
    let from: Vec<Component> = from_dir.components().collect();
    let to_parts: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..from.len() {
        segments.push("..".to_string());
    }
    for part in &to_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }

    segments.join("/")
}

/// Prefix a relative path with `./` unless it already starts with a dot.
pub fn ensure_dot(relative_path: &str) -> String {
    if relative_path.starts_with('.') {
        relative_path.to_string()
    } else {
        format!("./{}", relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_sibling_file() {
        assert_eq!(
            relative_to(Path::new("src/app"), Path::new("src/app/foo/foo.component")),
            "foo/foo.component"
        );
    }

    #[test]
    fn test_relative_to_walks_up() {
        assert_eq!(
            relative_to(Path::new("src/app/foo"), Path::new("src/shared/bar")),
            "../../shared/bar"
        );
    }

    #[test]
    fn test_ensure_dot() {
        assert_eq!(ensure_dot("foo/bar"), "./foo/bar");
        assert_eq!(ensure_dot("./foo"), "./foo");
        assert_eq!(ensure_dot("../foo"), "../foo");
    }
}
