use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use eyre::{Result, bail};
use ngsmith_codegen::{
    MockClock, SpecTs, auto_provides_path, blank_test, class_test, classless_test, component_test,
    component_test_with_test_module, find_module_for_class,
};
use ngsmith_core::{ScaffoldFile, find_primary_export, find_ts_project};

use crate::commands::{ensure_written, resolve_prefix};
use crate::ops::prompt;

/// Whether the component spec wraps the component in a test module with
/// a host template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Harness {
    Html,
    Plain,
}

impl fmt::Display for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Harness::Html => write!(f, "html"),
            Harness::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for Harness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Harness::Html),
            "plain" => Ok(Harness::Plain),
            _ => Err(format!("Unknown harness '{}'. Valid values: html, plain", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockFlavor {
    Async,
    Fake,
}

impl fmt::Display for ClockFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFlavor::Async => write!(f, "async"),
            ClockFlavor::Fake => write!(f, "fake"),
        }
    }
}

impl FromStr for ClockFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "async" => Ok(ClockFlavor::Async),
            "fake" => Ok(ClockFlavor::Fake),
            _ => Err(format!("Unknown mock clock '{}'. Valid values: async, fake", s)),
        }
    }
}

#[derive(Args)]
pub struct SpecCommand {
    /// TypeScript file to create a spec for
    file: PathBuf,

    /// Selector prefix, overriding ngsmith.toml
    #[arg(short, long)]
    prefix: Option<String>,

    /// Workspace root bounding the module search
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Component harness: html (test module with host template) or
    /// plain; prompted when omitted
    #[arg(long)]
    harness: Option<Harness>,

    /// Mock clock flavor: async or fake; prompted when omitted
    #[arg(long)]
    mock_clock: Option<ClockFlavor>,
}

impl SpecCommand {
    pub fn run(&self) -> Result<()> {
        let Some(file_name) = SpecTs::file_name_for(&self.file) else {
            bail!("You can only add unit tests to .ts files");
        };

        let parent = self.file.parent().unwrap_or(Path::new("."));
        let spec_path = parent.join(&file_name);
        if spec_path.exists() {
            bail!("A test file with the name {} already exists", spec_path.display());
        }

        let class_name = find_primary_export(&self.file)?;
        let ts_project = find_ts_project(&self.file);
        let auto_provides = ts_project
            .as_ref()
            .map(|dir| auto_provides_path(&self.file, dir));

        let is_component = self.file.to_string_lossy().ends_with(".component.ts");

        let content = match (&class_name, &auto_provides) {
            (Some(class_name), Some(auto_provides)) if is_component => {
                self.component_content(class_name, auto_provides)?
            }
            (Some(class_name), Some(auto_provides)) => {
                class_test(class_name, &self.file, auto_provides)
            }
            (None, Some(auto_provides)) => classless_test(auto_provides),
            (_, None) => blank_test(),
        };

        ensure_written(SpecTs { file_name, content }.write(parent)?)?;
        println!("Created {}", spec_path.display());

        Ok(())
    }

    fn component_content(&self, class_name: &str, auto_provides: &str) -> Result<String> {
        let prefix = resolve_prefix(
            self.file.parent().unwrap_or(Path::new(".")),
            self.prefix.as_deref(),
        );

        let Some(module) = find_module_for_class(&self.file, class_name, &prefix, &self.root)?
        else {
            return Ok("// could not find module for component being tested".to_string());
        };

        let harness = match self.harness {
            Some(harness) => harness,
            None => {
                let choice = prompt::select(
                    "Create a test module?",
                    &[
                        "Create with test html (Required for PopupAnchor)".to_string(),
                        "Create with no test html".to_string(),
                    ],
                )?;
                if choice == 0 { Harness::Html } else { Harness::Plain }
            }
        };

        let clock = match self.mock_clock {
            Some(ClockFlavor::Async) => MockClock::AsyncAwait,
            Some(ClockFlavor::Fake) => MockClock::FakeAsync,
            None => {
                let choice = prompt::select(
                    "What kind of mock clock?",
                    &[
                        "Use async/await mock clock".to_string(),
                        "Use fakeAsyncWrapper, not compatible with async/await".to_string(),
                    ],
                )?;
                if choice == 0 {
                    MockClock::AsyncAwait
                } else {
                    MockClock::FakeAsync
                }
            }
        };

        let content = match harness {
            Harness::Html => component_test_with_test_module(
                class_name,
                &self.file,
                auto_provides,
                &module,
                clock,
                &prefix,
            ),
            Harness::Plain => component_test(class_name, &self.file, auto_provides, &module, clock),
        };

        Ok(content)
    }
}
