//! Directive class file generator.

use std::path::{Path, PathBuf};

use ngsmith_core::{ScaffoldFile, directive_class_name, directive_selector_name, joined_name};

/// The `<name>.directive.ts` file. Directives live directly in the
/// target folder, without a unit subfolder.
pub struct DirectiveTs {
    pub prefix: Vec<String>,
    pub name: Vec<String>,
}

impl ScaffoldFile for DirectiveTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.directive.ts", joined_name(&self.name)))
    }

    fn render(&self) -> String {
        format!(
            r#"import {{Directive}} from '@angular/core';

@Directive({{
    moduleId: module.id,
    selector: '{selector}',
}})
export class {class} {{
    // TODO implement directive
}}
"#,
            selector = directive_selector_name(&self.prefix, &self.name),
            class = directive_class_name(&self.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_path_has_no_unit_folder() {
        let file = DirectiveTs {
            prefix: parts(&["app"]),
            name: parts(&["spin"]),
        };
        assert_eq!(file.path(Path::new("src")), Path::new("src").join("spin.directive.ts"));
    }

    #[test]
    fn test_render() {
        let file = DirectiveTs {
            prefix: parts(&["app"]),
            name: parts(&["spin", "fast"]),
        };
        let content = file.render();

        assert!(content.contains("selector: 'appSpinFast',"));
        assert!(content.contains("export class SpinFastDirective {"));
    }
}
