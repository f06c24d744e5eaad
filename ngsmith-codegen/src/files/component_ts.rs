//! Component class file generator.

use std::path::{Path, PathBuf};

use ngsmith_core::{ScaffoldFile, component_class_name, joined_name, selector_name};

/// The `<name>.component.ts` file.
pub struct ComponentTs {
    pub prefix: Vec<String>,
    pub name: Vec<String>,
}

impl ScaffoldFile for ComponentTs {
    fn path(&self, base: &Path) -> PathBuf {
        let folder = joined_name(&self.name);
        base.join(&folder).join(format!("{}.component.ts", folder))
    }

    fn render(&self) -> String {
        format!(
            r#"import {{Component, ChangeDetectionStrategy}} from '@angular/core';

@Component({{
    moduleId: module.id,
    selector: '{selector}',
    templateUrl: './{file}.component.html',
    changeDetection: ChangeDetectionStrategy.OnPush,
}})
export class {class} {{
    // TODO implement component
}}
"#,
            selector = selector_name(&self.prefix, &self.name),
            file = joined_name(&self.name),
            class = component_class_name(&self.name),
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
    fn test_path_nests_in_unit_folder() {
        let file = ComponentTs {
            prefix: parts(&["app"]),
            name: parts(&["foo", "bar"]),
        };
        assert_eq!(
            file.path(Path::new("src")),
            Path::new("src").join("foobar").join("foobar.component.ts")
        );
    }

    #[test]
    fn test_render() {
        let file = ComponentTs {
            prefix: parts(&["app"]),
            name: parts(&["foo", "bar"]),
        };
        let content = file.render();

        assert!(content.contains("selector: 'app-foo-bar',"));
        assert!(content.contains("templateUrl: './foobar.component.html',"));
        assert!(content.contains("export class FooBarComponent {"));
        assert!(content.contains("ChangeDetectionStrategy.OnPush"));
    }
}
