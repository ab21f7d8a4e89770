//! Layout options — spacing and padding decided from the display mode and
//! the viewport width class, plus merging of caller-supplied engine options
//! over the computed ones (caller keys win).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Widest viewport (in CSS pixels) still treated as a mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// How the rendered staff is embedded in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Dense inline context: minimal vertical padding, no horizontal padding
    Compact,
    /// Standalone display: breathing room scaled to the viewport class
    Full,
}

/// Padding around the rendered score, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    /// Padding for a display mode at a given viewport width.
    pub fn for_mode(mode: DisplayMode, viewport_width_px: f64) -> Self {
        match mode {
            DisplayMode::Compact => Padding {
                top: 4.0,
                bottom: 4.0,
                left: 0.0,
                right: 0.0,
            },
            DisplayMode::Full => {
                if viewport_width_px <= MOBILE_BREAKPOINT_PX {
                    Padding {
                        top: 8.0,
                        bottom: 15.0,
                        left: 10.0,
                        right: 10.0,
                    }
                } else {
                    Padding {
                        top: 10.0,
                        bottom: 20.0,
                        left: 20.0,
                        right: 20.0,
                    }
                }
            }
        }
    }
}

/// Options handed to the notation engine for one structural render.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Computed padding for the display mode / viewport class
    pub padding: Padding,
    /// Engine-specific passthrough options; shadow computed keys on merge
    pub extra: Map<String, Value>,
}

impl LayoutOptions {
    /// Compute the baseline options for a display mode and viewport width.
    pub fn compute(mode: DisplayMode, viewport_width_px: f64) -> Self {
        LayoutOptions {
            padding: Padding::for_mode(mode, viewport_width_px),
            extra: Map::new(),
        }
    }

    /// Layer caller-supplied engine options on top. Caller keys win over
    /// computed ones when the flattened map is built.
    pub fn with_overrides(mut self, overrides: &Map<String, Value>) -> Self {
        for (key, value) in overrides {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }

    /// Flatten into the key/value configuration map the engine consumes.
    pub fn to_engine_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("paddingtop".into(), self.padding.top.into());
        map.insert("paddingbottom".into(), self.padding.bottom.into());
        map.insert("paddingleft".into(), self.padding.left.into());
        map.insert("paddingright".into(), self.padding.right.into());
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}
