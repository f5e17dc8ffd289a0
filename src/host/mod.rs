mod static_host;

#[cfg(feature = "stylesheet")]
mod stylesheet;
#[cfg(all(feature = "web-adapter", target_arch = "wasm32"))]
mod web;

pub use static_host::StaticHost;

#[cfg(feature = "stylesheet")]
pub use stylesheet::StylesheetHost;
#[cfg(all(feature = "web-adapter", target_arch = "wasm32"))]
pub use web::{DocumentHost, ViewportListeners, attach_viewport_listeners};

use serde::{Deserialize, Serialize};

/// Custom property prefix used when a config does not override it.
pub const DEFAULT_PROPERTY_PREFIX: &str = "--breakpoint-";

/// Builds the custom property name for a tier, e.g. `--breakpoint-md`.
#[must_use]
pub fn property_name(prefix: &str, tier: &str) -> String {
    format!("{prefix}{tier}")
}

/// Environment the tracker reads from.
///
/// Implementations wrap the style source (computed custom properties) and the
/// viewport (current width). Load/resize notifications are pushed into the
/// tracker by the host integration through `BreakpointTracker::handle_viewport_event`.
pub trait BreakpointHost {
    fn viewport_width(&self) -> u32;

    /// Computed value of a custom property, `None` when it is not declared.
    fn custom_property(&self, name: &str) -> Option<String>;
}

impl<H: BreakpointHost + ?Sized> BreakpointHost for Box<H> {
    fn viewport_width(&self) -> u32 {
        (**self).viewport_width()
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        (**self).custom_property(name)
    }
}

/// Viewport notifications that trigger a crossing sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// Document content finished loading.
    Loaded,
    Resized,
}
