//! Mounted staff view — one engine, one surface, one graph/index pair.
//!
//! Structural renders (source changes) and overlay updates (status ticks)
//! are strictly separated: a status tick never re-invokes the engine, and a
//! render replaces the graph and index together so a tick can never observe
//! a torn pair built from different render passes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::engine::{NotationEngine, Surface};
use crate::error::RenderError;
use crate::graph::VisualGraph;
use crate::index::{build_event_index, EventIndex};
use crate::options::{DisplayMode, LayoutOptions};
use crate::overlay::{apply_statuses, NoteStatus};

/// One structural render request. Immutable per render cycle, owned by the
/// caller, read-only to the core.
#[derive(Debug, Clone)]
pub struct NotationSource {
    /// Notation text (format and grammar owned by the engine)
    pub text: String,
    /// Compact or full embedding
    pub display_mode: DisplayMode,
    /// Host viewport width, for the responsive padding class
    pub viewport_width_px: f64,
    /// Engine-specific overrides, merged over the computed layout options
    pub engine_options: Map<String, Value>,
}

impl NotationSource {
    /// Source with no engine overrides.
    pub fn new(text: impl Into<String>, display_mode: DisplayMode, viewport_width_px: f64) -> Self {
        NotationSource {
            text: text.into(),
            display_mode,
            viewport_width_px,
            engine_options: Map::new(),
        }
    }
}

/// Lifecycle of the mounted view, exposed to the host as its
/// loading/ready/error signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    /// Nothing rendered yet
    Unmounted,
    /// Structural render in progress
    Rendering,
    /// Graph and index mounted and consistent
    Ready,
    /// Last render failed; surface stays empty until the next source change
    Error,
}

/// A mounted staff view.
///
/// Owns the surface and its graph/index pair exclusively — hosts showing
/// several scores use one `StaffView` per container.
pub struct StaffView {
    engine: Box<dyn NotationEngine>,
    surface: Box<dyn Surface>,
    graph: Option<VisualGraph>,
    index: EventIndex,
    phase: ViewPhase,
    generation: u64,
}

impl StaffView {
    pub fn new(engine: Box<dyn NotationEngine>, surface: Box<dyn Surface>) -> Self {
        StaffView {
            engine,
            surface,
            graph: None,
            index: EventIndex::default(),
            phase: ViewPhase::Unmounted,
            generation: 0,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Bumped on every structural render attempt, success or failure. Hosts
    /// can tag status ticks with this to drop ones built for an older score.
    pub fn render_generation(&self) -> u64 {
        self.generation
    }

    /// Number of indexed events in the current render.
    pub fn event_count(&self) -> usize {
        self.index.len()
    }

    /// Event index of the current render.
    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    /// Visual graph of the current render, when one is mounted.
    pub fn graph(&self) -> Option<&VisualGraph> {
        self.graph.as_ref()
    }

    /// Replace the notation source and run a full structural render.
    ///
    /// Render failures are absorbed: the surface is left empty, the phase
    /// becomes `Error`, and the failure is logged — the host keeps its UI
    /// and retries by supplying new input. Every path leaves `Rendering`.
    pub fn set_source(&mut self, source: &NotationSource) {
        self.phase = ViewPhase::Rendering;
        self.generation += 1;

        match self.render_structural(source) {
            Ok(()) => {
                log::debug!(
                    "rendered {} events (generation {})",
                    self.index.len(),
                    self.generation
                );
                self.phase = ViewPhase::Ready;
            }
            Err(err) => {
                log::error!("failed to render notation: {err}");
                // No partially mounted output may survive a failed render.
                self.surface.clear();
                self.surface.reset_width();
                self.graph = None;
                self.index = EventIndex::default();
                self.phase = ViewPhase::Error;
            }
        }
    }

    /// Apply one tick's status sequence against the current index.
    ///
    /// Runs only in `Ready`; ticks arriving in any other phase are dropped
    /// and superseded by the next one. A stale-handle failure aborts this
    /// tick and is logged; the clear-then-apply sweep of the next tick
    /// repaints the surface from scratch.
    pub fn set_statuses(&mut self, statuses: &[NoteStatus]) {
        if self.phase != ViewPhase::Ready {
            return;
        }
        if let Err(err) = apply_statuses(self.surface.as_mut(), &self.index, statuses) {
            log::warn!("overlay pass aborted: {err}");
        }
    }

    fn render_structural(&mut self, source: &NotationSource) -> Result<(), RenderError> {
        if source.text.trim().is_empty() {
            return Err(RenderError::EmptySource);
        }

        // Stale primitives must not leak across renders, and a width pinned
        // by the previous measurement must not constrain the new layout.
        self.surface.clear();
        self.surface.reset_width();

        let options = LayoutOptions::compute(source.display_mode, source.viewport_width_px)
            .with_overrides(&source.engine_options);
        let graph = self
            .engine
            .render(self.surface.as_mut(), &source.text, &options)?;

        // Pin the frame to the measured width. No renderable group (the
        // notation produced no music) leaves the width automatic.
        if let Some(extent) = self.surface.rendered_extent() {
            self.surface.set_width(extent.width);
        }

        self.index = build_event_index(&graph);
        self.graph = Some(graph);
        Ok(())
    }
}
