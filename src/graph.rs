//! Visual graph model — what the notation engine reports it mounted.
//!
//! Engine adapters translate their internal output into these crate-owned
//! structures, so nothing downstream depends on a particular engine's
//! object shape. The structure mirrors rendered music: lines (systems)
//! contain staves, staves contain voices, voices are ordered runs of
//! musical events, and each event owns the drawable shapes representing it.

use serde::{Deserialize, Serialize};

/// Opaque, surface-scoped handle to one drawable shape.
///
/// Handles are issued by the surface while the engine mounts output and are
/// invalidated when the surface is cleared for the next structural render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveHandle(pub u64);

/// Output of one structural render pass.
///
/// The core never mutates this structure; decoration goes through the
/// surface, keyed by [`PrimitiveHandle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualGraph {
    /// Lines (systems) of rendered music, top to bottom
    pub lines: Vec<StaffLine>,
}

/// One line (system) of rendered music.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffLine {
    /// Staves in this line, top to bottom
    pub staves: Vec<Staff>,
}

/// One staff within a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Voices sharing this staff
    pub voices: Vec<Voice>,
}

/// One voice: an ordered run of musical events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Events in emitted (performance) order
    pub events: Vec<EventNode>,
}

/// One musical event (note, rest, or chord) in performance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventNode {
    /// Drawable shapes representing this event (head, stem, flags, ...)
    pub primitives: Vec<PrimitiveHandle>,
}

impl VisualGraph {
    /// First voice of the first staff of the first line, when present.
    pub fn lead_voice(&self) -> Option<&Voice> {
        self.lines.first()?.staves.first()?.voices.first()
    }
}
