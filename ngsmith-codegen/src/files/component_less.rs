//! Component stylesheet file generator.

use std::path::{Path, PathBuf};

use ngsmith_core::{ScaffoldFile, joined_name};

/// The `<name>.component.less` file.
pub struct ComponentLess {
    pub name: Vec<String>,
}

impl ScaffoldFile for ComponentLess {
    fn path(&self, base: &Path) -> PathBuf {
        let folder = joined_name(&self.name);
        base.join(&folder).join(format!("{}.component.less", folder))
    }

    fn render(&self) -> String {
        "\n// TODO write style code\n".to_string()
    }
}
