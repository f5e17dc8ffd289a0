use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Band, width_is_down, width_is_up};
use crate::host::{BreakpointHost, ViewportEvent};

use super::listener_registry::ListenerEntry;
use super::{BreakpointEvent, BreakpointTracker, DispatchMode, ListenerPayload, SweepReport};

/// Condition evaluated for one event during a sweep.
struct Signal {
    event: BreakpointEvent,
    active: bool,
    payload: ListenerPayload,
}

impl<H: BreakpointHost> BreakpointTracker<H> {
    /// Entry point for host load/resize notifications.
    pub fn handle_viewport_event(&mut self, event: ViewportEvent) -> SweepReport {
        trace!(?event, "viewport event");
        self.sweep()
    }

    /// Re-reads the viewport width and dispatches every listener whose
    /// condition holds.
    ///
    /// Tiers are visited in set order, firing `Up`, `Down` then `Only`
    /// listeners for each. `Between` listeners are then evaluated one by one
    /// in registration order. Callbacks run synchronously; a panicking
    /// callback aborts the rest of the sweep.
    pub fn sweep(&mut self) -> SweepReport {
        self.width = self.host.viewport_width();
        let width = f64::from(self.width);
        let mut report = SweepReport {
            width: self.width,
            ..SweepReport::default()
        };

        let mut signals: SmallVec<[Signal; 15]> = SmallVec::new();
        for tier in self.breakpoints.iter() {
            let (min, max) = match (self.min(tier), self.max(tier)) {
                (Ok(min), Ok(max)) => (min, max),
                (Err(err), _) | (_, Err(err)) => {
                    warn!(tier, error = %err, "skipping breakpoint during sweep");
                    report.skipped_tiers += 1;
                    continue;
                }
            };
            report.evaluated_tiers += 1;
            let payload = ListenerPayload::new(self.width, min, max);
            signals.push(Signal {
                event: BreakpointEvent::up(tier),
                active: width_is_up(width, min),
                payload,
            });
            signals.push(Signal {
                event: BreakpointEvent::down(tier),
                active: width_is_down(width, min),
                payload,
            });
            signals.push(Signal {
                event: BreakpointEvent::only(tier),
                active: Band::new(min, max, min).contains(width),
                payload,
            });
        }

        let between: Vec<(usize, Option<(bool, ListenerPayload)>)> = self
            .listeners
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match &entry.event {
                BreakpointEvent::Between { lower, upper } => {
                    let evaluated = match self.band(lower, upper) {
                        Ok(band) => Some((
                            band.contains(width),
                            ListenerPayload::new(self.width, band.min, band.max),
                        )),
                        Err(err) => {
                            warn!(event = %entry.event, error = %err, "skipping between listener");
                            None
                        }
                    };
                    Some((index, evaluated))
                }
                _ => None,
            })
            .collect();

        let mode = self.dispatch_mode;
        for signal in &signals {
            for entry in self
                .listeners
                .iter_mut()
                .filter(|entry| entry.event == signal.event)
            {
                if fire_entry(entry, mode, signal.active, signal.payload) {
                    report.fired_listeners += 1;
                }
            }
        }
        for (index, evaluated) in between {
            let Some((active, payload)) = evaluated else {
                continue;
            };
            if fire_entry(&mut self.listeners[index], mode, active, payload) {
                report.fired_listeners += 1;
            }
        }

        debug!(
            width = report.width,
            evaluated = report.evaluated_tiers,
            skipped = report.skipped_tiers,
            fired = report.fired_listeners,
            "breakpoint sweep finished"
        );
        report
    }

    /// Invokes every listener registered for `event`, in registration order,
    /// regardless of whether its condition holds.
    ///
    /// `Refresh` re-reads thresholds before its listeners run. Returns the
    /// number of listeners invoked.
    pub fn trigger(&mut self, event: &BreakpointEvent, payload: ListenerPayload) -> usize {
        if *event == BreakpointEvent::Refresh {
            self.refresh();
        }
        let mut fired = 0;
        for entry in self
            .listeners
            .iter_mut()
            .filter(|entry| entry.event == *event)
        {
            trace!(listener = entry.id.0, %event, "trigger listener");
            (entry.callback)(payload);
            fired += 1;
        }
        fired
    }
}

/// Applies the dispatch mode to one listener; returns whether it fired.
fn fire_entry(
    entry: &mut ListenerEntry,
    mode: DispatchMode,
    active: bool,
    payload: ListenerPayload,
) -> bool {
    let fire = match mode {
        DispatchMode::EveryResize => active,
        DispatchMode::OnTransition => active && !entry.was_active,
    };
    entry.was_active = active;
    if fire {
        trace!(listener = entry.id.0, event = %entry.event, width = payload.width, "fire listener");
        (entry.callback)(payload);
    }
    fire
}
