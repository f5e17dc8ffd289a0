use serde::{Deserialize, Serialize};

/// `true` when `width` reaches `min`. A missing lower bound always holds.
#[must_use]
pub fn width_is_up(width: f64, min: Option<f64>) -> bool {
    min.is_none_or(|min| width >= min)
}

/// `true` when `width` is below `min`. Nothing is below a missing lower bound.
#[must_use]
pub fn width_is_down(width: f64, min: Option<f64>) -> bool {
    min.is_some_and(|min| width < min)
}

/// Width interval between the lower edge of one tier and the upper edge of
/// another (possibly the same) tier.
///
/// `upper_min` is the upper tier's own minimum; it bounds the band when the
/// lower tier has no minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub upper_min: Option<f64>,
}

impl Band {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>, upper_min: Option<f64>) -> Self {
        Self {
            min,
            max,
            upper_min,
        }
    }

    /// Band membership:
    /// - both edges known: strictly inside `(min, max)`
    /// - open top: same as [`width_is_up`] on `min`
    /// - open bottom: same as [`width_is_down`] on `upper_min`
    /// - open on both sides: every width
    #[must_use]
    pub fn contains(self, width: f64) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min < width && width < max,
            (None, None) => true,
            (min, None) => width_is_up(width, min),
            (None, Some(_)) => width_is_down(width, self.upper_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Band, width_is_down, width_is_up};

    #[test]
    fn missing_lower_bound_is_always_up_and_never_down() {
        assert!(width_is_up(0.0, None));
        assert!(!width_is_down(0.0, None));
    }

    #[test]
    fn up_is_inclusive_and_down_is_exclusive() {
        assert!(width_is_up(768.0, Some(768.0)));
        assert!(!width_is_up(767.0, Some(768.0)));
        assert!(width_is_down(767.0, Some(768.0)));
        assert!(!width_is_down(768.0, Some(768.0)));
    }

    #[test]
    fn bounded_band_excludes_both_edges() {
        let band = Band::new(Some(768.0), Some(991.98), Some(768.0));
        assert!(band.contains(800.0));
        assert!(!band.contains(768.0));
        assert!(!band.contains(991.98));
        assert!(!band.contains(1000.0));
    }

    #[test]
    fn open_edges_degrade_to_single_comparisons() {
        assert!(Band::new(Some(1200.0), None, Some(1200.0)).contains(1200.0));
        assert!(!Band::new(Some(1200.0), None, Some(1200.0)).contains(1199.0));
        assert!(Band::new(None, None, None).contains(10_000.0));
    }

    #[test]
    fn open_bottom_stops_at_upper_tier_minimum() {
        // xs..md: below md's minimum, not below md's maximum.
        let band = Band::new(None, Some(991.98), Some(768.0));
        assert!(band.contains(0.0));
        assert!(band.contains(767.0));
        assert!(!band.contains(768.0));
        assert!(!band.contains(800.0));

        // A bottom tier on its own has nothing below its missing minimum.
        assert!(!Band::new(None, Some(575.98), None).contains(0.0));
    }
}
