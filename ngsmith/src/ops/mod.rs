//! Core operations.
//!
//! This module contains the scaffolding and registration logic for
//! ngsmith commands, separated from CLI argument parsing.

pub mod prompt;
pub mod register;
