use thiserror::Error;

use crate::resolve::ResolveError;
use crate::types::TypeKey;

/// An error returned by [`Engine::adapter`](crate::engine::Engine::adapter).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Every factory declined.
    #[error("no JSON adapter for `{ty}`")]
    NoAdapter { ty: TypeKey },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
