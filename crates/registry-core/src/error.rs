//! Registry error types

use thiserror::Error;

/// Errors the CLI flow branches on, as opposed to environment failures that
/// propagate via `anyhow` and terminate the run.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested name has no manifest entry. Callers report this per item
    /// and continue with the remaining selections.
    #[error("component '{0}' is not in the registry")]
    UnknownComponent(String),

    /// The registry manifest itself could not be found.
    #[error("registry manifest not found at {0}")]
    ManifestMissing(String),
}
