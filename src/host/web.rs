//! Browser integration for wasm32 targets.
//!
//! `DocumentHost` reads the viewport width and the computed custom properties
//! of `document.documentElement`. `attach_viewport_listeners` routes the
//! window's `DOMContentLoaded` and `resize` events into the tracker sweep.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::api::BreakpointTracker;
use crate::error::{BreakpointError, BreakpointResult};

use super::{BreakpointHost, ViewportEvent};

pub struct DocumentHost {
    window: Window,
}

impl DocumentHost {
    pub fn from_window() -> BreakpointResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BreakpointError::HostUnavailable("no global window".to_owned()))?;
        Ok(Self { window })
    }
}

impl BreakpointHost for DocumentHost {
    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .filter(|width| width.is_finite() && *width >= 0.0)
            .map_or(0, |width| width as u32)
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        let root = self.window.document()?.document_element()?;
        let style = self.window.get_computed_style(&root).ok()??;
        let value = style.get_property_value(name).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    }
}

/// Keeps the DOM listeners alive; dropping it detaches them.
pub struct ViewportListeners {
    window: Window,
    on_load: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl Drop for ViewportListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "DOMContentLoaded",
            self.on_load.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

pub fn attach_viewport_listeners<H>(
    tracker: Rc<RefCell<BreakpointTracker<H>>>,
) -> BreakpointResult<ViewportListeners>
where
    H: BreakpointHost + 'static,
{
    let window = web_sys::window()
        .ok_or_else(|| BreakpointError::HostUnavailable("no global window".to_owned()))?;

    let on_load = sweep_closure(Rc::clone(&tracker), ViewportEvent::Loaded);
    let on_resize = sweep_closure(tracker, ViewportEvent::Resized);

    window
        .add_event_listener_with_callback("DOMContentLoaded", on_load.as_ref().unchecked_ref())
        .map_err(|e| BreakpointError::HostUnavailable(format!("{e:?}")))?;
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| BreakpointError::HostUnavailable(format!("{e:?}")))?;

    Ok(ViewportListeners {
        window,
        on_load,
        on_resize,
    })
}

fn sweep_closure<H>(
    tracker: Rc<RefCell<BreakpointTracker<H>>>,
    event: ViewportEvent,
) -> Closure<dyn FnMut()>
where
    H: BreakpointHost + 'static,
{
    Closure::wrap(Box::new(move || match tracker.try_borrow_mut() {
        Ok(mut tracker) => {
            tracker.handle_viewport_event(event);
        }
        Err(_) => warn!(?event, "tracker busy, dropping re-entrant viewport event"),
    }) as Box<dyn FnMut()>)
}
