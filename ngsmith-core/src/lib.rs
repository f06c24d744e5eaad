//! Core utilities and types for the ngsmith scaffolder.
//!
//! This crate provides naming conventions, file writing, workspace
//! discovery, and project configuration used across the ngsmith
//! ecosystem.

mod config;
mod discover;
mod file;
mod naming;
mod relpath;

// Project configuration
pub use config::{Config, ConfigError, ConfigResult};
// Workspace discovery
pub use discover::{find_build, find_modules, find_primary_export, find_ts_project};
// File operations
pub use file::{ScaffoldFile, WriteResult};
// Naming conventions
pub use naming::{
    camel_case, component_class_name, component_name_parts, directive_class_name,
    directive_selector_name, joined_name, lower_camel_case, module_class_name, name_parts,
    selector_name, validate_class_name,
};
// Relative paths for generated imports
pub use relpath::{ensure_dot, relative_to};
