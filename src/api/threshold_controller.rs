use tracing::{debug, trace};

use crate::core::{Threshold, ThresholdTable};
use crate::error::{BreakpointError, BreakpointResult};
use crate::host::{BreakpointHost, property_name};

use super::{BreakpointTracker, NextBreakpoint};

impl<H: BreakpointHost> BreakpointTracker<H> {
    /// Re-reads every tier's custom property and replaces the whole table.
    ///
    /// Values that do not parse are kept as [`Threshold::Unresolved`]; the
    /// refresh itself never fails.
    pub fn refresh(&mut self) -> &ThresholdTable {
        let table: ThresholdTable = self
            .breakpoints
            .iter()
            .map(|tier| {
                let property = property_name(&self.property_prefix, tier);
                let raw = self.host.custom_property(&property);
                trace!(%property, raw = ?raw, "read breakpoint property");
                (tier, Threshold::from_raw(raw.as_deref()))
            })
            .collect();
        debug!(
            tiers = table.len(),
            unresolved = table.unresolved_count(),
            "refreshed breakpoint thresholds"
        );
        self.thresholds = table;
        &self.thresholds
    }

    /// Raw threshold lookup; `None` for names outside the set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.thresholds.get(name)
    }

    /// Tier after `name` when it has a resolved, non-zero threshold.
    ///
    /// `Ok(None)` marks `name` as the top tier.
    pub fn next(&self, name: &str) -> BreakpointResult<Option<NextBreakpoint>> {
        self.breakpoints.ensure_contains(name)?;
        let Some(key) = self.breakpoints.next_name(name) else {
            return Ok(None);
        };
        Ok(self
            .thresholds
            .get(key)
            .and_then(Threshold::px)
            .filter(|value| *value != 0.0)
            .map(|value| NextBreakpoint {
                key: key.to_owned(),
                value,
            }))
    }

    /// Lower edge of the tier. A zero threshold means no lower bound.
    pub fn min(&self, name: &str) -> BreakpointResult<Option<f64>> {
        match self.thresholds.get(name) {
            None => Err(BreakpointError::unknown(name)),
            Some(Threshold::Px { value }) => Ok((*value != 0.0).then_some(*value)),
            Some(Threshold::Unresolved { raw }) => Err(BreakpointError::UnresolvedThreshold {
                name: name.to_owned(),
                raw: raw.clone(),
            }),
        }
    }

    /// Upper edge of the tier: just below the next tier's minimum, or `None`
    /// for the top tier.
    pub fn max(&self, name: &str) -> BreakpointResult<Option<f64>> {
        let Some(next) = self.next(name)? else {
            return Ok(None);
        };
        Ok(self
            .min(&next.key)?
            .map(|next_min| next_min - self.max_offset_px))
    }
}
