use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ngsmith_codegen::ModuleTs;
use ngsmith_core::{ScaffoldFile, joined_name, module_class_name, name_parts, validate_class_name};

use crate::commands::{ensure_written, resolve_prefix};
use crate::ops::prompt;

const NAME_EXAMPLE: &str = "TestModule FooBarModule";

#[derive(Args)]
pub struct ModuleCommand {
    /// Folder that will contain the new module
    dir: PathBuf,

    /// Module class name (prompted when omitted)
    name: Option<String>,

    /// Selector prefix, overriding ngsmith.toml
    #[arg(short, long)]
    prefix: Option<String>,
}

impl ModuleCommand {
    pub fn run(&self) -> Result<()> {
        let class_input = match &self.name {
            Some(name) => {
                if let Err(message) = validate_class_name(name, NAME_EXAMPLE) {
                    bail!(message);
                }
                name.clone()
            }
            None => prompt::class_name("NewModule", "Name of module class", NAME_EXAMPLE)?,
        };

        let prefix = resolve_prefix(&self.dir, self.prefix.as_deref());
        let mut name = name_parts(&class_input);
        if name.last().is_some_and(|p| p == "module") {
            name.pop();
        }

        // A name that repeats the configured prefix collapses into it,
        // so `AppBillingModule` under prefix `app` creates `billing/`.
        if name.len() >= prefix.len() && name[..prefix.len()] == prefix[..] {
            name.drain(..prefix.len());
        }

        if name.is_empty() {
            bail!("Name must contain at least one word besides 'Module'");
        }

        let folder = self.dir.join(joined_name(&name));
        if folder.exists() {
            bail!("File or folder with name {} already exists", folder.display());
        }

        ensure_written(
            ModuleTs {
                prefix: prefix.clone(),
                name: name.clone(),
            }
            .write(&self.dir)?,
        )?;

        println!(
            "Created module {} in {}",
            module_class_name(&prefix, &name),
            folder.display()
        );

        Ok(())
    }
}
