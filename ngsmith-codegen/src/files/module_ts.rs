//! Registration module file generator.

use std::path::{Path, PathBuf};

use ngsmith_core::{ScaffoldFile, joined_name, module_class_name};

/// The `<name>.module.ts` file, with empty registration arrays ready for
/// structural insertion.
pub struct ModuleTs {
    pub prefix: Vec<String>,
    pub name: Vec<String>,
}

impl ScaffoldFile for ModuleTs {
    fn path(&self, base: &Path) -> PathBuf {
        let folder = joined_name(&self.name);
        base.join(&folder).join(format!("{}.module.ts", folder))
    }

    fn render(&self) -> String {
        format!(
            r#"import {{NgModule}} from '@angular/core';
import {{CommonModule}} from '@angular/common';

@NgModule({{
    declarations: [
    ],
    entryComponents: [
    ],
    exports: [
    ],
    imports: [
        CommonModule,
    ],
}})
export class {class} {{}};
"#,
            class = module_class_name(&self.prefix, &self.name),
        )
    }
}
