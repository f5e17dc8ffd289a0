use crate::error::{BreakpointError, BreakpointResult};

/// Bootstrap tier names, smallest first.
pub const DEFAULT_BREAKPOINTS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

/// Ordered, validated list of tier names.
///
/// Order is ascending by width and decides which tier is "next" when the
/// upper edge of a band is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSet {
    names: Vec<String>,
}

impl BreakpointSet {
    pub fn new<I, S>(names: I) -> BreakpointResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(BreakpointError::InvalidBreakpointSet(
                "at least one breakpoint name is required".to_owned(),
            ));
        }
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(BreakpointError::InvalidBreakpointSet(format!(
                    "breakpoint name at position {index} must not be empty"
                )));
            }
            if names[..index].contains(name) {
                return Err(BreakpointError::InvalidBreakpointSet(format!(
                    "breakpoint `{name}` is declared more than once"
                )));
            }
        }
        Ok(Self { names })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|entry| entry == name)
    }

    /// Tier following `name`, or `None` for the last tier and unknown names.
    #[must_use]
    pub fn next_name(&self, name: &str) -> Option<&str> {
        let index = self.position(name)?;
        self.names.get(index + 1).map(String::as_str)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn ensure_contains(&self, name: &str) -> BreakpointResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(BreakpointError::unknown(name))
        }
    }
}

impl Default for BreakpointSet {
    fn default() -> Self {
        Self {
            names: DEFAULT_BREAKPOINTS.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}
