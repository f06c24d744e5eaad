//! Module registration.
//!
//! Registers a freshly scaffolded unit in a `*.module.ts` file: one
//! import insertion followed by one insertion each into `declarations`
//! and `exports`. A failed step is reported and never blocks the
//! remaining steps.

use std::path::{Path, PathBuf};

use eyre::Result;
use ngsmith_core::relative_to;
use ngsmith_edit::{FsHost, ModuleEditor};

use crate::ops::prompt;

/// Per-step outcome of a registration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub import_added: bool,
    pub declaration_added: bool,
    pub export_added: bool,
}

/// Register `class_name` in the module at `module_path`.
///
/// `unit_path` is the scaffolded file's path without the `.ts`
/// extension; `suffix_group` is the unit's category (`.component` or
/// `.directive`), used to keep related imports grouped and sorted.
pub fn register_unit(
    module_path: &Path,
    class_name: &str,
    unit_path: &Path,
    suffix_group: &str,
) -> Result<RegisterOutcome> {
    let mut editor = ModuleEditor::open(module_path, FsHost)?;

    let import_added = editor.add_import(&[class_name.to_string()], unit_path, suffix_group)?;
    let declaration_added = editor.add_to_group("declarations", class_name)?;
    let export_added = editor.add_to_group("exports", class_name)?;

    Ok(RegisterOutcome {
        import_added,
        declaration_added,
        export_added,
    })
}

/// Print one warning per failed registration step.
pub fn report(outcome: &RegisterOutcome) {
    if !outcome.import_added {
        eprintln!("warning: could not add import to module");
    }
    if !outcome.declaration_added {
        eprintln!("warning: could not add class to declarations");
    }
    if !outcome.export_added {
        eprintln!("warning: could not add class to exports");
    }
}

/// Choose the module to register into: the `--module` flag when given,
/// otherwise a prompt over the discovered candidates with an opt-out
/// row. Returns `None` when there is nothing to register into or the
/// user opts out.
pub fn choose_module(
    flag: Option<&Path>,
    candidates: &[PathBuf],
    relative_base: &Path,
) -> Result<Option<PathBuf>> {
    if let Some(module) = flag {
        return Ok(Some(module.to_path_buf()));
    }

    if candidates.is_empty() {
        return Ok(None);
    }

    let mut items: Vec<String> = candidates
        .iter()
        .map(|module| relative_to(relative_base, module))
        .collect();
    items.push("Do not add to a module".to_string());

    let selected = prompt::select("Add to module", &items)?;

    Ok(candidates.get(selected).cloned())
}
