use std::fmt;

use serde::{Deserialize, Serialize};

/// Events listeners subscribe to.
///
/// Tier names are carried as data, so names containing `.` or `-` never
/// collide with the event kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreakpointEvent {
    /// Width is at or above the tier's minimum.
    Up { name: String },
    /// Width is below the tier's minimum.
    Down { name: String },
    /// Width is inside the tier's own band.
    Only { name: String },
    /// Width is between `lower`'s minimum and `upper`'s maximum.
    Between { lower: String, upper: String },
    /// Thresholds were re-read from the host.
    Refresh,
}

impl BreakpointEvent {
    #[must_use]
    pub fn up(name: impl Into<String>) -> Self {
        Self::Up { name: name.into() }
    }

    #[must_use]
    pub fn down(name: impl Into<String>) -> Self {
        Self::Down { name: name.into() }
    }

    #[must_use]
    pub fn only(name: impl Into<String>) -> Self {
        Self::Only { name: name.into() }
    }

    #[must_use]
    pub fn between(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self::Between {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    /// Tier names referenced by the event.
    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            Self::Up { name } | Self::Down { name } | Self::Only { name } => {
                (Some(name.as_str()), None)
            }
            Self::Between { lower, upper } => (Some(lower.as_str()), Some(upper.as_str())),
            Self::Refresh => (None, None),
        };
        first.into_iter().chain(second)
    }
}

/// Renders the dotted form (`up.md`, `between.sm-lg`) used in logs.
impl fmt::Display for BreakpointEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up { name } => write!(f, "up.{name}"),
            Self::Down { name } => write!(f, "down.{name}"),
            Self::Only { name } => write!(f, "only.{name}"),
            Self::Between { lower, upper } => write!(f, "between.{lower}-{upper}"),
            Self::Refresh => f.write_str("refresh"),
        }
    }
}

/// Arguments delivered to a listener.
///
/// `width` is always the viewport width read by the sweep, for every event
/// kind. Sweeps pass the tier's own `min`/`max` for up/down/only events, and
/// `min(lower)`/`max(upper)` for between events. Manual triggers deliver the
/// caller's payload unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListenerPayload {
    pub width: u32,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ListenerPayload {
    #[must_use]
    pub fn new(width: u32, min: Option<f64>, max: Option<f64>) -> Self {
        Self { width, min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Tier following another one in set order, with its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextBreakpoint {
    pub key: String,
    pub value: f64,
}

/// Outcome of one crossing sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub width: u32,
    pub evaluated_tiers: usize,
    /// Tiers left out because their threshold could not be resolved.
    pub skipped_tiers: usize,
    pub fired_listeners: usize,
}
