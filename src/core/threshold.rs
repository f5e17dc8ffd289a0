use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parsed value of one `--breakpoint-<name>` custom property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Threshold {
    /// Minimum width in pixels. `0` means the tier has no lower bound.
    Px { value: f64 },
    /// Property was absent (`raw: None`) or did not start with an integer.
    Unresolved { raw: Option<String> },
}

impl Threshold {
    /// Parses a computed style value using integer-prefix semantics:
    /// surrounding whitespace and trailing units are ignored, so `" 576px"`
    /// resolves to 576 while `"auto"` and `"px"` stay unresolved.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.and_then(parse_px) {
            Some(value) => Self::Px { value },
            None => Self::Unresolved {
                raw: raw.map(str::to_owned),
            },
        }
    }

    #[must_use]
    pub fn px(&self) -> Option<f64> {
        match self {
            Self::Px { value } => Some(*value),
            Self::Unresolved { .. } => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Px { .. })
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::Px { value }
    }
}

/// Leading-integer parse of a CSS value.
#[must_use]
pub fn parse_px(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse::<f64>().ok()
}

/// Tier name to threshold mapping, in breakpoint-set order.
///
/// Built wholesale by a refresh and swapped in as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    entries: IndexMap<String, Threshold>,
}

impl ThresholdTable {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Threshold)> {
        self.entries
            .iter()
            .map(|(name, threshold)| (name.as_str(), threshold))
    }

    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|threshold| !threshold.is_resolved())
            .count()
    }
}

impl<S: Into<String>> FromIterator<(S, Threshold)> for ThresholdTable {
    fn from_iter<T: IntoIterator<Item = (S, Threshold)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, threshold)| (name.into(), threshold))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Threshold, ThresholdTable, parse_px};

    #[test]
    fn parse_px_reads_integer_prefix() {
        assert_eq!(parse_px("576px"), Some(576.0));
        assert_eq!(parse_px("  768"), Some(768.0));
        assert_eq!(parse_px("-4rem"), Some(-4.0));
        assert_eq!(parse_px("+12"), Some(12.0));
        assert_eq!(parse_px("991.98px"), Some(991.0));
    }

    #[test]
    fn parse_px_rejects_non_numeric_values() {
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("-"), None);
        assert_eq!(parse_px(".5"), None);
    }

    #[test]
    fn unresolved_threshold_keeps_raw_value() {
        assert_eq!(
            Threshold::from_raw(Some("wide")),
            Threshold::Unresolved {
                raw: Some("wide".to_owned())
            }
        );
        assert_eq!(Threshold::from_raw(None), Threshold::Unresolved { raw: None });
        assert_eq!(Threshold::from_raw(Some("0")).px(), Some(0.0));
    }

    #[test]
    fn table_preserves_insertion_order() {
        let table: ThresholdTable = [
            ("lg", Threshold::from(992.0)),
            ("sm", Threshold::from(576.0)),
            ("md", Threshold::from_raw(None)),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["lg", "sm", "md"]);
        assert_eq!(table.unresolved_count(), 1);
    }
}
