//! Event-to-glyph index — ordered mapping from logical event position
//! (performance order) to the primitives that draw it.
//!
//! This is the bridge between the host's status ticks, which address events
//! by position, and the shapes on the surface. The index is rebuilt together
//! with the visual graph on every structural render and is read-only to the
//! overlay pass.

use serde::Serialize;

use crate::graph::{PrimitiveHandle, VisualGraph};

/// Primitives drawing one musical event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventRef {
    /// Handles of every shape mounted for this event
    pub primitives: Vec<PrimitiveHandle>,
}

/// Ordered event → primitives mapping for the lead voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventIndex {
    /// One entry per event, in performance order
    pub events: Vec<EventRef>,
}

impl EventIndex {
    /// Number of indexed events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are indexed.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Build the index from a freshly rendered graph.
///
/// Indexes the first voice of the first staff of the first line only — the
/// scores this feature displays are single-voice, and additional voices are
/// deliberately not addressed. A graph with no music (empty parse, missing
/// lines/staves/voices) yields an empty index rather than an error.
pub fn build_event_index(graph: &VisualGraph) -> EventIndex {
    let Some(voice) = graph.lead_voice() else {
        return EventIndex::default();
    };

    let events = voice
        .events
        .iter()
        .map(|node| EventRef {
            primitives: node.primitives.clone(),
        })
        .collect();

    EventIndex { events }
}

/// Serialize an index to JSON for the host (hit testing, debugging).
pub fn event_index_to_json(index: &EventIndex) -> String {
    serde_json::to_string(index).unwrap_or_else(|_| "{}".to_string())
}
