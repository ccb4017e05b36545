//! Sources of marked declarations.
//!
//! - [`SourceScanner`]: `#[json_class]` items of a crate's Rust sources.
//! - [`SymbolDump`]: a JSON dump written by an external symbol resolver.

// -----------------------------------------------------------------------------
// Modules

mod declaration;
mod dump;
mod scanner;

// -----------------------------------------------------------------------------
// Exports

pub use declaration::{Declaration, DeclarationKind};
pub use dump::SymbolDump;
pub use scanner::SourceScanner;

use crate::error::CodegenError;

/// Supplies the declarations carrying the `json_class` marker, with their
/// marker arguments and originating files.
pub trait SymbolSource {
    /// Returns the marked declarations in discovery order.
    ///
    /// Problems with single declarations or files are logged and skipped;
    /// an error means the source as a whole is unusable.
    fn declarations(&mut self) -> Result<Vec<Declaration>, CodegenError>;
}

impl<S: SymbolSource + ?Sized> SymbolSource for &mut S {
    #[inline]
    fn declarations(&mut self) -> Result<Vec<Declaration>, CodegenError> {
        (**self).declarations()
    }
}
