//! staffview — staff notation display core.
//!
//! Drives an external score-rendering engine from compact notation text and
//! overlays per-note highlight state (correct / incorrect / playing)
//! delivered at playback tick rate by the host's evaluation driver.
//!
//! The expensive structural render (engine invocation, width measurement,
//! index rebuild) and the cheap per-tick decoration pass are strictly
//! separated: a status tick repaints markers against the existing
//! event-to-glyph index without touching the engine. Audio, notation
//! parsing, and session state all live in the host; this crate only renders,
//! measures, indexes, and decorates.
//!
//! The engine and the host container sit behind the [`NotationEngine`] and
//! [`Surface`] traits, and the crate owns the [`VisualGraph`] model engine
//! adapters report into, so nothing downstream depends on a particular
//! engine's object shape.

pub mod engine;
pub mod error;
pub mod graph;
pub mod index;
pub mod options;
pub mod overlay;
pub mod view;

pub use engine::{Extent, NotationEngine, Surface};
pub use error::{OverlayError, RenderError};
pub use graph::{EventNode, PrimitiveHandle, Staff, StaffLine, VisualGraph, Voice};
pub use index::{build_event_index, event_index_to_json, EventIndex, EventRef};
pub use options::{DisplayMode, LayoutOptions, Padding, MOBILE_BREAKPOINT_PX};
pub use overlay::{apply_statuses, Marker, NoteStatus};
pub use view::{NotationSource, StaffView, ViewPhase};
