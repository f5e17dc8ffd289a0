pub mod band;
pub mod breakpoint_set;
pub mod threshold;

pub use band::{Band, width_is_down, width_is_up};
pub use breakpoint_set::{BreakpointSet, DEFAULT_BREAKPOINTS};
pub use threshold::{Threshold, ThresholdTable, parse_px};
