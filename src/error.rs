//! Error taxonomy.
//!
//! Render failures are absorbed by the view (cleared surface, error phase);
//! overlay failures abort a single tick and self-heal on the next one.
//! Nothing here is fatal to the host.

use thiserror::Error;

use crate::graph::PrimitiveHandle;

/// A structural render could not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The notation text was empty or whitespace-only.
    #[error("notation source is empty")]
    EmptySource,

    /// The external engine rejected the notation or failed internally.
    #[error("notation engine failed: {0}")]
    Engine(String),
}

/// A decoration pass addressed a primitive the surface no longer knows,
/// typically because a structural render cleared the surface after the
/// addressing index was built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// Handle was invalidated by an intervening surface clear.
    #[error("stale primitive handle {0:?}")]
    StaleHandle(PrimitiveHandle),
}
