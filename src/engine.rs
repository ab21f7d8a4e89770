//! Engine and surface seams — the two external capabilities the core drives.
//!
//! [`NotationEngine`] is the score renderer: it consumes notation text plus
//! layout options, mounts drawable output into a [`Surface`], and reports
//! what it mounted as a [`VisualGraph`].
//! [`Surface`] is the host container: it issues primitive handles while the
//! engine mounts, answers geometry queries, and carries per-primitive
//! decoration state.

use crate::error::{OverlayError, RenderError};
use crate::graph::{PrimitiveHandle, VisualGraph};
use crate::options::LayoutOptions;
use crate::overlay::Marker;

/// Measured bounding box of rendered output, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

/// External score-rendering engine.
pub trait NotationEngine {
    /// Render notation text into `surface`, returning the visual graph
    /// describing what was mounted.
    ///
    /// Implementations must not assume the surface is empty; the caller
    /// clears it and resets its width before every render. The notation
    /// format and its validation belong to the engine, not to this crate.
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        text: &str,
        options: &LayoutOptions,
    ) -> Result<VisualGraph, RenderError>;
}

/// The host container the engine mounts into and the overlay decorates.
pub trait Surface {
    /// Append a drawable primitive to the mounted output and hand back its
    /// handle. Called by the engine while rendering.
    fn mount_primitive(&mut self) -> PrimitiveHandle;

    /// Drop all mounted output. Invalidates every handle issued so far.
    fn clear(&mut self);

    /// Reset the frame's explicit width so the next render lays out
    /// unconstrained by a previous measurement.
    fn reset_width(&mut self);

    /// Pin the frame to an explicit width in pixels. Keeps horizontal
    /// scrolling and centering correct for scores narrower or wider than
    /// the viewport.
    fn set_width(&mut self, px: f64);

    /// Bounding box of the first top-level rendered group, or `None` when
    /// nothing renderable is mounted.
    fn rendered_extent(&self) -> Option<Extent>;

    /// Replace the marker on a mounted primitive. `Marker::None` strips any
    /// existing decoration.
    fn set_marker(
        &mut self,
        primitive: PrimitiveHandle,
        marker: Marker,
    ) -> Result<(), OverlayError>;

    /// Strip highlight markers from every decorated primitive.
    fn clear_markers(&mut self);
}
