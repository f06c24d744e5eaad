//! Structural editing of Angular module registration files.
//!
//! This crate locates insertion points in `*.module.ts` files from
//! partial lexical cues (regular-expression anchors plus bracket-depth
//! scanning) and applies single insert-only edits that keep import
//! statements and `@NgModule` array entries alphabetically ordered
//! while preserving the file's existing formatting. No TypeScript
//! parser is involved; files whose shape does not match expectations
//! produce a "not found" outcome instead of a corrupted edit.

mod brackets;
mod editor;
mod error;
mod imports;
mod registry;
mod text;

// Bracket-depth scanning
pub use brackets::step_over_brackets;
// Module editing
pub use editor::{BufferHost, FsHost, MemoryHost, ModuleEditor, NG_MODULE_ANCHOR};
pub use error::{Error, Result};
// Insertion-point location
pub use imports::{ImportInsertion, locate_import_insertion};
pub use registry::{ArrayInsertion, locate_array_insertion};
// Offset/position addressing
pub use text::{Position, leading_whitespace, next_line_start, offset_at, position_at, start_of_line};
