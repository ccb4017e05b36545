//! Rendering of generated files.

// -----------------------------------------------------------------------------
// Modules

mod keep_rules;
mod table;

// -----------------------------------------------------------------------------
// Exports

pub use keep_rules::{KEEP_RULES_DIR, ShrinkerSymbols};
pub use table::GENERATED_HEADER;

pub(crate) use keep_rules::KeepRules;
pub(crate) use table::TableSource;
