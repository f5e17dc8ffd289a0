use indexmap::IndexMap;

use crate::core::DEFAULT_BREAKPOINTS;

use super::{BreakpointHost, DEFAULT_PROPERTY_PREFIX, property_name};

/// Bootstrap 4 `--breakpoint-*` values, matching [`DEFAULT_BREAKPOINTS`].
pub const BOOTSTRAP_THRESHOLDS_PX: [u32; 5] = [0, 576, 768, 992, 1200];

/// In-memory host used by tests and headless embedding.
///
/// Property values are stored verbatim, so callers can exercise the same
/// parsing paths a browser's computed style would hit (`"576px"`, `" 0"`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticHost {
    width: u32,
    properties: IndexMap<String, String>,
}

impl StaticHost {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            width,
            properties: IndexMap::new(),
        }
    }

    /// Host preloaded with the Bootstrap thresholds under the default prefix.
    #[must_use]
    pub fn bootstrap(width: u32) -> Self {
        Self::new(width).with_thresholds(
            DEFAULT_BREAKPOINTS
                .iter()
                .copied()
                .zip(BOOTSTRAP_THRESHOLDS_PX),
        )
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Declares `--breakpoint-<tier>: <px>px` for every pair.
    #[must_use]
    pub fn with_thresholds<'a>(
        mut self,
        thresholds: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        for (tier, px) in thresholds {
            self.set_property(
                property_name(DEFAULT_PROPERTY_PREFIX, tier),
                format!("{px}px"),
            );
        }
        self
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Returns the removed value, if any.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
}

impl BreakpointHost for StaticHost {
    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn custom_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::StaticHost;
    use crate::host::BreakpointHost;

    #[test]
    fn bootstrap_host_declares_default_properties() {
        let host = StaticHost::bootstrap(1024);
        assert_eq!(host.viewport_width(), 1024);
        assert_eq!(host.custom_property("--breakpoint-xs").as_deref(), Some("0px"));
        assert_eq!(host.custom_property("--breakpoint-lg").as_deref(), Some("992px"));
        assert_eq!(host.custom_property("--breakpoint-xxl"), None);
    }

    #[test]
    fn removing_a_property_makes_it_undeclared() {
        let mut host = StaticHost::new(0).with_property("--breakpoint-sm", "540px");
        assert_eq!(host.remove_property("--breakpoint-sm").as_deref(), Some("540px"));
        assert_eq!(host.custom_property("--breakpoint-sm"), None);
    }
}
