//! Shared stub engine and surface for integration tests.
//!
//! The stub engine "renders" by counting note letters (A–G, a–g) in the
//! notation body — lines carrying a `:` are treated as headers — and mounts
//! two primitives per note (a head and a stem), the way a real engine
//! would. The stub surface tracks mounted handles, markers, and the
//! explicit frame width, and reports an extent of 12 px per mounted shape.
//!
//! Both stubs expose their state through `Rc<RefCell<..>>` so tests can
//! inspect it after the view takes ownership of the boxed trait objects.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};
use staffview::{
    EventNode, Extent, LayoutOptions, Marker, NotationEngine, OverlayError, PrimitiveHandle,
    RenderError, Staff, StaffLine, StaffView, Surface, VisualGraph, Voice,
};

/// Pixel width the stub surface reports per mounted primitive.
pub const PX_PER_PRIMITIVE: f64 = 12.0;

#[derive(Default)]
pub struct SurfaceState {
    next_handle: u64,
    pub mounted: Vec<PrimitiveHandle>,
    pub markers: HashMap<PrimitiveHandle, Marker>,
    /// Explicit frame width in pixels; `None` = automatic.
    pub width: Option<f64>,
}

#[derive(Clone, Default)]
pub struct StubSurface {
    pub state: Rc<RefCell<SurfaceState>>,
}

impl Surface for StubSurface {
    fn mount_primitive(&mut self) -> PrimitiveHandle {
        let mut state = self.state.borrow_mut();
        let handle = PrimitiveHandle(state.next_handle);
        state.next_handle += 1;
        state.mounted.push(handle);
        handle
    }

    fn clear(&mut self) {
        let mut state = self.state.borrow_mut();
        state.mounted.clear();
        state.markers.clear();
    }

    fn reset_width(&mut self) {
        self.state.borrow_mut().width = None;
    }

    fn set_width(&mut self, px: f64) {
        self.state.borrow_mut().width = Some(px);
    }

    fn rendered_extent(&self) -> Option<Extent> {
        let state = self.state.borrow();
        if state.mounted.is_empty() {
            return None;
        }
        Some(Extent {
            width: state.mounted.len() as f64 * PX_PER_PRIMITIVE,
            height: 60.0,
        })
    }

    fn set_marker(
        &mut self,
        primitive: PrimitiveHandle,
        marker: Marker,
    ) -> Result<(), OverlayError> {
        let mut state = self.state.borrow_mut();
        if !state.mounted.contains(&primitive) {
            return Err(OverlayError::StaleHandle(primitive));
        }
        if marker == Marker::None {
            state.markers.remove(&primitive);
        } else {
            state.markers.insert(primitive, marker);
        }
        Ok(())
    }

    fn clear_markers(&mut self) {
        self.state.borrow_mut().markers.clear();
    }
}

#[derive(Default)]
pub struct EngineState {
    /// Fail the next render with an engine error when set.
    pub fail: bool,
    /// Flattened option map seen on the last render.
    pub last_options: Option<Map<String, Value>>,
    /// Number of renders performed.
    pub renders: usize,
}

#[derive(Clone, Default)]
pub struct StubEngine {
    pub state: Rc<RefCell<EngineState>>,
}

impl NotationEngine for StubEngine {
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        text: &str,
        options: &LayoutOptions,
    ) -> Result<VisualGraph, RenderError> {
        let mut state = self.state.borrow_mut();
        state.renders += 1;
        state.last_options = Some(options.to_engine_map());
        if state.fail {
            return Err(RenderError::Engine("stub engine failure".into()));
        }

        let notes = note_count(text);
        if notes == 0 {
            return Ok(VisualGraph::default());
        }

        let events = (0..notes)
            .map(|_| EventNode {
                // head + stem
                primitives: vec![surface.mount_primitive(), surface.mount_primitive()],
            })
            .collect();

        Ok(VisualGraph {
            lines: vec![StaffLine {
                staves: vec![Staff {
                    voices: vec![Voice { events }],
                }],
            }],
        })
    }
}

/// Note letters in the notation body, header lines excluded.
pub fn note_count(text: &str) -> usize {
    text.lines()
        .filter(|line| !line.contains(':'))
        .flat_map(|line| line.chars())
        .filter(|c| matches!(c, 'A'..='G' | 'a'..='g'))
        .count()
}

/// A view over fresh stubs, plus handles to their shared state.
pub fn make_view() -> (StaffView, Rc<RefCell<SurfaceState>>, Rc<RefCell<EngineState>>) {
    let surface = StubSurface::default();
    let engine = StubEngine::default();
    let surface_state = surface.state.clone();
    let engine_state = engine.state.clone();
    let view = StaffView::new(Box::new(engine), Box::new(surface));
    (view, surface_state, engine_state)
}

/// Markers currently applied to the primitives of one indexed event.
pub fn event_markers(
    view: &StaffView,
    surface: &Rc<RefCell<SurfaceState>>,
    event: usize,
) -> Vec<Marker> {
    let state = surface.borrow();
    view.index().events[event]
        .primitives
        .iter()
        .filter_map(|handle| state.markers.get(handle).copied())
        .collect()
}
