use crate::core::{Band, width_is_down, width_is_up};
use crate::error::BreakpointResult;
use crate::host::BreakpointHost;

use super::BreakpointTracker;

impl<H: BreakpointHost> BreakpointTracker<H> {
    /// `min(lower)` .. `max(upper)`, with `min(upper)` for an open bottom.
    pub fn band(&self, lower: &str, upper: &str) -> BreakpointResult<Band> {
        Ok(Band::new(
            self.min(lower)?,
            self.max(upper)?,
            self.min(upper)?,
        ))
    }

    pub fn is_up(&self, name: &str) -> BreakpointResult<bool> {
        self.is_up_at(name, self.width)
    }

    pub fn is_up_at(&self, name: &str, width: u32) -> BreakpointResult<bool> {
        Ok(width_is_up(f64::from(width), self.min(name)?))
    }

    pub fn is_down(&self, name: &str) -> BreakpointResult<bool> {
        self.is_down_at(name, self.width)
    }

    pub fn is_down_at(&self, name: &str, width: u32) -> BreakpointResult<bool> {
        Ok(width_is_down(f64::from(width), self.min(name)?))
    }

    pub fn is_between(&self, lower: &str, upper: &str) -> BreakpointResult<bool> {
        self.is_between_at(lower, upper, self.width)
    }

    /// See [`Band::contains`] for how open edges are handled.
    pub fn is_between_at(&self, lower: &str, upper: &str, width: u32) -> BreakpointResult<bool> {
        Ok(self.band(lower, upper)?.contains(f64::from(width)))
    }

    pub fn is_only(&self, name: &str) -> BreakpointResult<bool> {
        self.is_between(name, name)
    }

    pub fn is_only_at(&self, name: &str, width: u32) -> BreakpointResult<bool> {
        self.is_between_at(name, name, width)
    }

    /// Highest tier that is up at the current width.
    #[must_use]
    pub fn current_breakpoint(&self) -> Option<&str> {
        self.breakpoint_for_width(self.width)
    }

    /// Highest tier that is up at `width`. Tiers without a resolved
    /// threshold are ignored.
    #[must_use]
    pub fn breakpoint_for_width(&self, width: u32) -> Option<&str> {
        self.breakpoints
            .iter()
            .rev()
            .find(|tier| self.is_up_at(tier, width).unwrap_or(false))
    }
}
