//! breakpoints-rs: responsive breakpoint tracking.
//!
//! Tier thresholds come from `--breakpoint-<name>` custom properties exposed
//! by a [`host::BreakpointHost`]. [`BreakpointTracker`] answers up/down/only/
//! between queries against the viewport width and dispatches typed listeners
//! when the host reports load or resize.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod telemetry;

pub use api::{BreakpointEvent, BreakpointTracker, ListenerPayload, TrackerConfig};
pub use error::{BreakpointError, BreakpointResult};
pub use host::{BreakpointHost, StaticHost, ViewportEvent};
