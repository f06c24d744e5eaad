use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ngsmith_codegen::DirectiveTs;
use ngsmith_core::{
    ScaffoldFile, directive_class_name, find_modules, joined_name, name_parts, validate_class_name,
};

use crate::commands::{ensure_written, resolve_prefix};
use crate::ops::{prompt, register};

const NAME_EXAMPLE: &str = "TestDirective FooBarDirective";

#[derive(Args)]
pub struct DirectiveCommand {
    /// Folder that will contain the new directive
    dir: PathBuf,

    /// Directive class name (prompted when omitted)
    name: Option<String>,

    /// Selector prefix, overriding ngsmith.toml
    #[arg(short, long)]
    prefix: Option<String>,

    /// Module file to register into, skipping the prompt
    #[arg(short, long)]
    module: Option<PathBuf>,

    /// Workspace root bounding the module search
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Do not register the directive in any module
    #[arg(long)]
    skip_register: bool,
}

impl DirectiveCommand {
    pub fn run(&self) -> Result<()> {
        let class_input = match &self.name {
            Some(name) => {
                if let Err(message) = validate_class_name(name, NAME_EXAMPLE) {
                    bail!(message);
                }
                name.clone()
            }
            None => prompt::class_name("NewDirective", "Name of directive class", NAME_EXAMPLE)?,
        };

        let prefix = resolve_prefix(&self.dir, self.prefix.as_deref());
        let mut name = name_parts(&class_input);
        if name.last().is_some_and(|p| p == "directive") {
            name.pop();
        }
        if name.is_empty() {
            bail!("Name must contain at least one word besides 'Directive'");
        }

        ensure_written(
            DirectiveTs {
                prefix: prefix.clone(),
                name: name.clone(),
            }
            .write(&self.dir)?,
        )?;

        let class_name = directive_class_name(&name);
        println!("Created directive {} in {}", class_name, self.dir.display());

        if !self.skip_register {
            let modules = find_modules(&self.dir, &self.root)?;
            if let Some(module_path) =
                register::choose_module(self.module.as_deref(), &modules, &self.dir)?
            {
                let unit_path = self.dir.join(format!("{}.directive", joined_name(&name)));
                let outcome =
                    register::register_unit(&module_path, &class_name, &unit_path, ".directive")?;
                register::report(&outcome);
            }
        }

        Ok(())
    }
}
