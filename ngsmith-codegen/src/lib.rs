//! File generation for the ngsmith scaffolder.
//!
//! The [`files`] module holds one generator per scaffolded file kind;
//! [`spec`] derives unit-test content from what the tested file exports.

pub mod files;
pub mod spec;

pub use files::{ComponentHtml, ComponentLess, ComponentTs, DirectiveTs, ModuleTs, SpecTs};
pub use spec::{
    MockClock, ModuleInfo, auto_provides_path, blank_test, class_test, classless_test,
    component_test, component_test_with_test_module, find_module_for_class,
};
