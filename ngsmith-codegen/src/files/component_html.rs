//! Component template file generator.

use std::path::{Path, PathBuf};

use ngsmith_core::{ScaffoldFile, joined_name};

/// The `<name>.component.html` file.
///
/// The stylesheet link points at the compiled `.css`, not the `.less`
/// source next to it.
pub struct ComponentHtml {
    pub name: Vec<String>,
}

impl ScaffoldFile for ComponentHtml {
    fn path(&self, base: &Path) -> PathBuf {
        let folder = joined_name(&self.name);
        base.join(&folder).join(format!("{}.component.html", folder))
    }

    fn render(&self) -> String {
        format!(
            r#"<link rel="stylesheet" type="text/css" href="{file}.component.css">

<!-- TODO write template code -->
"#,
            file = joined_name(&self.name),
        )
    }
}
