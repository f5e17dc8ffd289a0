use thiserror::Error;

pub type BreakpointResult<T> = Result<T, BreakpointError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    #[error("invalid breakpoint set: {0}")]
    InvalidBreakpointSet(String),

    #[error("unknown breakpoint `{name}`")]
    UnknownBreakpoint { name: String },

    #[error("breakpoint `{name}` has no numeric threshold (raw value: {raw:?})")]
    UnresolvedThreshold { name: String, raw: Option<String> },

    #[error("invalid tracker config: {0}")]
    InvalidConfig(String),

    #[error("stylesheet error: {0}")]
    Stylesheet(String),

    #[error("viewport host unavailable: {0}")]
    HostUnavailable(String),
}

impl BreakpointError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownBreakpoint {
            name: name.to_owned(),
        }
    }
}
