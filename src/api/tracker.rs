use tracing::debug;

use crate::core::{BreakpointSet, ThresholdTable};
use crate::error::BreakpointResult;
use crate::host::BreakpointHost;

use super::listener_registry::ListenerEntry;
use super::{DispatchMode, TrackerConfig};

/// Viewport breakpoint tracker.
///
/// Holds the tier set, the thresholds last read from the host, the current
/// viewport width and the listener registry. All of it is owned by one
/// instance; nothing is shared between trackers.
pub struct BreakpointTracker<H: BreakpointHost> {
    pub(super) host: H,
    pub(super) breakpoints: BreakpointSet,
    pub(super) property_prefix: String,
    pub(super) max_offset_px: f64,
    pub(super) dispatch_mode: DispatchMode,
    pub(super) thresholds: ThresholdTable,
    pub(super) width: u32,
    pub(super) listeners: Vec<ListenerEntry>,
    pub(super) next_listener_id: u64,
}

impl<H: BreakpointHost> BreakpointTracker<H> {
    /// Validates `config`, captures the current width and reads thresholds.
    pub fn new(host: H, config: TrackerConfig) -> BreakpointResult<Self> {
        let breakpoints = config.validate()?;
        let width = host.viewport_width();
        let mut tracker = Self {
            host,
            breakpoints,
            property_prefix: config.property_prefix,
            max_offset_px: config.max_offset_px,
            dispatch_mode: config.dispatch_mode,
            thresholds: ThresholdTable::default(),
            width,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        tracker.refresh();
        debug!(
            tiers = tracker.breakpoints.iter().len(),
            width,
            dispatch_mode = ?tracker.dispatch_mode,
            "breakpoint tracker initialized"
        );
        Ok(tracker)
    }

    /// Tracker over the Bootstrap tier set.
    pub fn with_defaults(host: H) -> BreakpointResult<Self> {
        Self::new(host, TrackerConfig::default())
    }

    /// Width captured at construction or by the latest sweep.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    #[must_use]
    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    #[must_use]
    pub fn dispatch_mode(&self) -> DispatchMode {
        self.dispatch_mode
    }

    #[must_use]
    pub fn config(&self) -> TrackerConfig {
        TrackerConfig {
            breakpoints: self.breakpoints.iter().map(str::to_owned).collect(),
            property_prefix: self.property_prefix.clone(),
            max_offset_px: self.max_offset_px,
            dispatch_mode: self.dispatch_mode,
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Changes are picked up by the next `refresh`
    /// (thresholds) or sweep (width).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
