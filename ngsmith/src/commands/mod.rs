mod build;
mod completions;
mod component;
mod directive;
mod module;
mod spec;

use build::BuildCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use component::ComponentCommand;
use directive::DirectiveCommand;
use eyre::Result;
use module::ModuleCommand;
use spec::SpecCommand;

/// Extension trait for exiting on configuration errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ngsmith_core::ConfigResult<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Resolve the selector prefix: the `--prefix` flag when given,
/// otherwise whatever ngsmith.toml configures near `dir`.
pub(crate) fn resolve_prefix(dir: &std::path::Path, flag: Option<&str>) -> Vec<String> {
    match flag {
        Some(prefix) => ngsmith_core::name_parts(prefix),
        None => ngsmith_core::Config::discover(dir)
            .unwrap_or_exit()
            .prefix_parts(),
    }
}

/// Treat an already-existing scaffold target as a hard error.
pub(crate) fn ensure_written(result: ngsmith_core::WriteResult) -> Result<()> {
    match result {
        ngsmith_core::WriteResult::Written(_) => Ok(()),
        ngsmith_core::WriteResult::AlreadyExists(path) => {
            eyre::bail!("File with name {} already exists", path.display())
        }
    }
}

#[derive(Parser)]
#[command(name = "ngsmith")]
#[command(version)]
#[command(about = "Scaffold Angular units and register them in their module")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Component(cmd) => cmd.run(),
            Commands::Directive(cmd) => cmd.run(),
            Commands::Module(cmd) => cmd.run(),
            Commands::Spec(cmd) => cmd.run(),
            Commands::Build(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a component and register it in a module
    Component(ComponentCommand),

    /// Create a directive and register it in a module
    Directive(DirectiveCommand),

    /// Create a registration module
    Module(ModuleCommand),

    /// Create a unit-test spec for a TypeScript file
    Spec(SpecCommand),

    /// Print the nearest BUILD file
    Build(BuildCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
