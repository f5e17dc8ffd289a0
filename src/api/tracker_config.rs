use serde::{Deserialize, Serialize};

use crate::core::{BreakpointSet, DEFAULT_BREAKPOINTS};
use crate::error::{BreakpointError, BreakpointResult};
use crate::host::DEFAULT_PROPERTY_PREFIX;

/// Sub-pixel gap between a tier's max and the next tier's min.
pub const DEFAULT_MAX_OFFSET_PX: f64 = 0.02;

/// When sweep listeners fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Fire on every sweep while the listener's condition holds.
    #[default]
    EveryResize,
    /// Fire only when the condition goes from false to true since the
    /// listener's previous evaluation.
    OnTransition,
}

/// Tracker bootstrap configuration.
///
/// Serializable so host applications can ship it alongside their theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<String>,
    #[serde(default = "default_property_prefix")]
    pub property_prefix: String,
    #[serde(default = "default_max_offset_px")]
    pub max_offset_px: f64,
    #[serde(default)]
    pub dispatch_mode: DispatchMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            property_prefix: default_property_prefix(),
            max_offset_px: default_max_offset_px(),
            dispatch_mode: DispatchMode::default(),
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tier list, smallest first.
    #[must_use]
    pub fn with_breakpoints<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_property_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.property_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_max_offset_px(mut self, offset: f64) -> Self {
        self.max_offset_px = offset;
        self
    }

    #[must_use]
    pub fn with_dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.dispatch_mode = mode;
        self
    }

    /// Checks the config and returns the validated tier set.
    pub fn validate(&self) -> BreakpointResult<BreakpointSet> {
        if self.property_prefix.is_empty() {
            return Err(BreakpointError::InvalidConfig(
                "property prefix must not be empty".to_owned(),
            ));
        }
        if !self.max_offset_px.is_finite() || self.max_offset_px < 0.0 {
            return Err(BreakpointError::InvalidConfig(
                "max offset must be finite and >= 0".to_owned(),
            ));
        }
        BreakpointSet::new(self.breakpoints.iter().cloned())
    }

    pub fn from_json_str(input: &str) -> BreakpointResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            BreakpointError::InvalidConfig(format!("failed to parse tracker config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> BreakpointResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BreakpointError::InvalidConfig(format!("failed to serialize tracker config: {e}"))
        })
    }
}

fn default_breakpoints() -> Vec<String> {
    DEFAULT_BREAKPOINTS.iter().map(|name| (*name).to_owned()).collect()
}

fn default_property_prefix() -> String {
    DEFAULT_PROPERTY_PREFIX.to_owned()
}

fn default_max_offset_px() -> f64 {
    DEFAULT_MAX_OFFSET_PX
}
