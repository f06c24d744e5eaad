//! Generators for scaffolded files.

mod component_html;
mod component_less;
mod component_ts;
mod directive_ts;
mod module_ts;
mod spec_ts;

pub use component_html::ComponentHtml;
pub use component_less::ComponentLess;
pub use component_ts::ComponentTs;
pub use directive_ts::DirectiveTs;
pub use module_ts::ModuleTs;
pub use spec_ts::SpecTs;
