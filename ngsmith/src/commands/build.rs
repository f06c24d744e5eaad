use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use ngsmith_core::find_build;

#[derive(Args)]
pub struct BuildCommand {
    /// Directory to search from
    #[arg(default_value = ".")]
    dir: PathBuf,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        match find_build(&self.dir) {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => bail!("No path found for BUILD file"),
        }
    }
}
