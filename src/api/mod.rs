mod event;
mod listener_registry;
mod predicates;
mod sweep;
mod threshold_controller;
mod tracker;
mod tracker_config;

pub use event::{BreakpointEvent, ListenerId, ListenerPayload, NextBreakpoint, SweepReport};
pub use listener_registry::ListenerCallback;
pub use tracker::BreakpointTracker;
pub use tracker_config::{DEFAULT_MAX_OFFSET_PX, DispatchMode, TrackerConfig};
