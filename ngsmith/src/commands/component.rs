use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ngsmith_codegen::{ComponentHtml, ComponentLess, ComponentTs};
use ngsmith_core::{
    ScaffoldFile, component_class_name, component_name_parts, find_modules, joined_name,
    validate_class_name,
};

use crate::commands::{ensure_written, resolve_prefix};
use crate::ops::{prompt, register};

const NAME_EXAMPLE: &str = "TestComponent FooBarComponent";

#[derive(Args)]
pub struct ComponentCommand {
    /// Folder that will contain the new component
    dir: PathBuf,

    /// Component class name (prompted when omitted)
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

    /// Do not register the component in any module
    #[arg(long)]
    skip_register: bool,
}

impl ComponentCommand {
    pub fn run(&self) -> Result<()> {
        let class_input = match &self.name {
            Some(name) => {
                if let Err(message) = validate_class_name(name, NAME_EXAMPLE) {
                    bail!(message);
                }
                name.clone()
            }
            None => prompt::class_name("NewComponent", "Name of component class", NAME_EXAMPLE)?,
        };

        let prefix = resolve_prefix(&self.dir, self.prefix.as_deref());
        let name = component_name_parts(&class_input);
        if name.is_empty() {
            bail!("Name must contain at least one word besides 'Component'");
        }

        let folder = self.dir.join(joined_name(&name));
        if folder.exists() {
            bail!("File or folder with name {} already exists", folder.display());
        }

        ensure_written(
            ComponentTs {
                prefix: prefix.clone(),
                name: name.clone(),
            }
            .write(&self.dir)?,
        )?;
        ensure_written(ComponentHtml { name: name.clone() }.write(&self.dir)?)?;
        ensure_written(ComponentLess { name: name.clone() }.write(&self.dir)?)?;

        let class_name = component_class_name(&name);
        println!("Created component {} in {}", class_name, folder.display());

        if !self.skip_register {
            let modules = find_modules(&self.dir, &self.root)?;
            if let Some(module_path) =
                register::choose_module(self.module.as_deref(), &modules, &self.dir)?
            {
                let unit_path = folder.join(format!("{}.component", joined_name(&name)));
                let outcome =
                    register::register_unit(&module_path, &class_name, &unit_path, ".component")?;
                register::report(&outcome);
            }
        }

        Ok(())
    }
}
