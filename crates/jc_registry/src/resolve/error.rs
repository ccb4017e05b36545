use thiserror::Error;

use crate::adapter::AdapterError;
use crate::class::ConstructorShape;
use crate::types::{ClassName, TypeKey};

// -----------------------------------------------------------------------------
// ResolveError

/// A resolution failure after an adapter class was found.
///
/// Declining (no marker, no adapter class) is not an error: factories return
/// `Ok(None)` so the next factory in the chain is consulted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The adapter class exposes no constructor acceptable for the request.
    #[error(
        "failed to find the generated JSON adapter constructor for `{ty}` in `{class}`{}",
        generic_hint(.generic_raw)
    )]
    MissingConstructor {
        ty: TypeKey,
        class: ClassName,
        /// The request was raw while the adapter class declares type parameters.
        generic_raw: bool,
    },

    /// The selected constructor failed.
    #[error("failed to create JSON adapter for `{ty}` with `{class}{shape}`")]
    Instantiation {
        ty: TypeKey,
        class: ClassName,
        shape: ConstructorShape,
        #[source]
        source: AdapterError,
    },
}

fn generic_hint(generic_raw: &bool) -> &'static str {
    if *generic_raw {
        "; the type was not parameterized but the adapter class is generic, \
        request the type with its type arguments (for example through `Typed::type_key`)"
    } else {
        ""
    }
}
