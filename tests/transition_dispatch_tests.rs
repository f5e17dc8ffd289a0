use std::cell::RefCell;
use std::rc::Rc;

use breakpoints_rs::api::{BreakpointTracker, DispatchMode, TrackerConfig};
use breakpoints_rs::{StaticHost, ViewportEvent};

fn transition_tracker(width: u32) -> BreakpointTracker<StaticHost> {
    let config = TrackerConfig::new().with_dispatch_mode(DispatchMode::OnTransition);
    BreakpointTracker::new(StaticHost::bootstrap(width), config).expect("tracker init")
}

fn resize(tracker: &mut BreakpointTracker<StaticHost>, width: u32) -> usize {
    tracker.host_mut().set_width(width);
    tracker
        .handle_viewport_event(ViewportEvent::Resized)
        .fired_listeners
}

#[test]
fn only_listener_fires_once_per_entry_into_band() {
    let mut tracker = transition_tracker(0);
    let widths = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&widths);
    tracker
        .only("md", move |payload| seen.borrow_mut().push(payload.width))
        .expect("register");

    for width in [800, 850, 900, 1000, 1100, 780] {
        resize(&mut tracker, width);
    }

    assert_eq!(widths.borrow().as_slice(), [800, 780]);
}

#[test]
fn between_listeners_track_their_own_state() {
    let mut tracker = transition_tracker(0);
    let widths = Rc::new(RefCell::new(Vec::new()));
    let early = Rc::clone(&widths);
    tracker
        .between("sm", "md", move |payload| early.borrow_mut().push(("early", payload.width)))
        .expect("register");

    assert_eq!(resize(&mut tracker, 700), 1);

    let late = Rc::clone(&widths);
    tracker
        .between("sm", "md", move |payload| late.borrow_mut().push(("late", payload.width)))
        .expect("register");

    assert_eq!(resize(&mut tracker, 720), 1);
    assert_eq!(
        widths.borrow().as_slice(),
        [("early", 700), ("late", 720)]
    );
}

#[test]
fn first_sweep_fires_conditions_already_true() {
    let mut tracker = transition_tracker(1300);
    tracker.up("xs", |_| {}).expect("register");
    tracker.up("xl", |_| {}).expect("register");
    tracker.down("xl", |_| {}).expect("register");

    let report = tracker.handle_viewport_event(ViewportEvent::Loaded);
    assert_eq!(report.fired_listeners, 2);
    assert_eq!(
        tracker
            .handle_viewport_event(ViewportEvent::Resized)
            .fired_listeners,
        0
    );
}
