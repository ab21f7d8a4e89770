//! Highlight overlay — the decoration-only pass that repaints per-note
//! state against an existing event index, at playback tick rate, without
//! touching the structural render.

use serde::{Deserialize, Serialize};

use crate::engine::Surface;
use crate::error::OverlayError;
use crate::index::EventIndex;

/// Per-note evaluation/playback state, delivered once per tick by the host
/// driver. Aligned by position to the event index; missing trailing entries
/// mean neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    Correct,
    Incorrect,
    Playing,
    #[default]
    Neutral,
}

/// Decoration state of one primitive. Exactly one marker at a time; setting
/// a marker replaces whatever was there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    #[default]
    None,
    Correct,
    Incorrect,
    Playing,
}

impl Marker {
    /// CSS class a DOM-backed surface applies for this marker.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Marker::None => None,
            Marker::Correct => Some("note-correct"),
            Marker::Incorrect => Some("note-incorrect"),
            Marker::Playing => Some("note-playing"),
        }
    }
}

impl From<NoteStatus> for Marker {
    fn from(status: NoteStatus) -> Self {
        match status {
            NoteStatus::Correct => Marker::Correct,
            NoteStatus::Incorrect => Marker::Incorrect,
            NoteStatus::Playing => Marker::Playing,
            NoteStatus::Neutral => Marker::None,
        }
    }
}

/// Repaint highlight state across the mounted surface.
///
/// Sweeps every existing marker first, then applies one marker per status,
/// positionally aligned to the index. A status of `Neutral` applies nothing,
/// so a previously marked event ends the pass undecorated. Statuses beyond
/// the index, or events beyond the statuses, are simply left alone.
///
/// The full sweep — rather than diffing against the previous sequence —
/// keeps the surface convergent even when a tick was dropped or the index
/// was just rebuilt. A stale handle aborts the pass; the surface stays
/// partially decorated until the next tick's sweep repaints it.
pub fn apply_statuses(
    surface: &mut dyn Surface,
    index: &EventIndex,
    statuses: &[NoteStatus],
) -> Result<(), OverlayError> {
    surface.clear_markers();

    for (status, event) in statuses.iter().zip(&index.events) {
        let marker = Marker::from(*status);
        if marker == Marker::None {
            continue;
        }
        for &primitive in &event.primitives {
            surface.set_marker(primitive, marker)?;
        }
    }

    Ok(())
}
