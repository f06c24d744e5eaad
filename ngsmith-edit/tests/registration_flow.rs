//! End-to-end registration flow against the filesystem host.
//!
//! Mirrors the scaffolder's orchestration: one import insertion followed
//! by one insertion each into `declarations` and `exports`, every step
//! re-reading the file so it observes the previous edit.

use std::fs;
use std::path::Path;

use ngsmith_edit::{FsHost, ModuleEditor};
use tempfile::TempDir;

const MODULE: &str = "\
import {NgModule} from '@angular/core';
import {CommonModule} from '@angular/common';
import {AlphaComponent} from './alpha/alpha.component';

@NgModule({
    declarations: [
        AlphaComponent,
    ],
    entryComponents: [
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

#[test]
fn test_full_registration_sequence() {
    let temp = TempDir::new().unwrap();
    let app_dir = temp.path().join("src").join("app");
    fs::create_dir_all(&app_dir).unwrap();
    let module_path = app_dir.join("app.module.ts");
    fs::write(&module_path, MODULE).unwrap();

    let mut editor = ModuleEditor::open(&module_path, FsHost).unwrap();

    let unit_path = app_dir.join("beta").join("beta.component");
    assert!(editor
        .add_import(&["BetaComponent".to_string()], &unit_path, ".component")
        .unwrap());
    assert!(editor.add_to_group("declarations", "BetaComponent").unwrap());
    assert!(editor.add_to_group("exports", "BetaComponent").unwrap());

    let text = fs::read_to_string(&module_path).unwrap();

    // The import slots in after the alphabetically-earlier import.
    let alpha_import = text.find("{AlphaComponent} from").unwrap();
    let beta_import = text
        .find("import {BetaComponent} from './beta/beta.component';")
        .unwrap();
    assert!(alpha_import < beta_import);
    assert!(beta_import < text.find("@NgModule").unwrap());

    // Both arrays stay sorted; appended entries use the default indent
    // and the closing bracket's own indentation is untouched.
    assert!(text.contains(
        "declarations: [\n        AlphaComponent,\n    BetaComponent,\n    ],"
    ));
    assert!(text.contains("exports: [\n        AlphaComponent,\n    BetaComponent,\n    ],"));
}

#[test]
fn test_failed_step_does_not_block_later_steps() {
    let no_exports = "\
import {AlphaComponent} from './alpha/alpha.component';

@NgModule({
    declarations: [
        AlphaComponent,
    ],
})
export class AppModule {};
";
    let temp = TempDir::new().unwrap();
    let module_path = temp.path().join("app.module.ts");
    fs::write(&module_path, no_exports).unwrap();

    let mut editor = ModuleEditor::open(&module_path, FsHost).unwrap();

    assert!(!editor.add_to_group("exports", "BetaComponent").unwrap());
    assert!(editor.add_to_group("declarations", "BetaComponent").unwrap());

    let text = fs::read_to_string(&module_path).unwrap();
    assert!(!text.contains("exports"));
    assert!(text.contains("BetaComponent,"));
}

#[test]
fn test_open_missing_module_is_a_hard_error() {
    assert!(ModuleEditor::open(Path::new("/nonexistent/app.module.ts"), FsHost).is_err());
}
