use breakpoints_rs::api::{BreakpointTracker, DispatchMode, TrackerConfig};
use breakpoints_rs::{StaticHost, ViewportEvent};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TIERS: [&str; 5] = ["xs", "sm", "md", "lg", "xl"];

fn tracker_with_listeners(mode: DispatchMode) -> BreakpointTracker<StaticHost> {
    let config = TrackerConfig::new().with_dispatch_mode(mode);
    let mut tracker =
        BreakpointTracker::new(StaticHost::bootstrap(0), config).expect("valid tracker");
    for i in 0..200 {
        let tier = TIERS[i % TIERS.len()];
        let upper = TIERS[(i + 2) % TIERS.len()];
        tracker
            .up(tier, |payload| {
                black_box(payload);
            })
            .expect("register up");
        tracker
            .only(tier, |payload| {
                black_box(payload);
            })
            .expect("register only");
        tracker
            .between(tier, upper, |payload| {
                black_box(payload);
            })
            .expect("register between");
    }
    tracker
}

fn bench_resize_sweep(c: &mut Criterion) {
    let mut tracker = tracker_with_listeners(DispatchMode::EveryResize);
    let mut width = 0u32;

    c.bench_function("resize_sweep_600_listeners", |b| {
        b.iter(|| {
            width = (width + 37) % 1_600;
            tracker.host_mut().set_width(width);
            black_box(tracker.handle_viewport_event(ViewportEvent::Resized));
        })
    });
}

fn bench_transition_sweep(c: &mut Criterion) {
    let mut tracker = tracker_with_listeners(DispatchMode::OnTransition);
    let mut width = 0u32;

    c.bench_function("transition_sweep_600_listeners", |b| {
        b.iter(|| {
            width = (width + 37) % 1_600;
            tracker.host_mut().set_width(width);
            black_box(tracker.sweep());
        })
    });
}

fn bench_point_queries(c: &mut Criterion) {
    let tracker =
        BreakpointTracker::with_defaults(StaticHost::bootstrap(0)).expect("valid tracker");

    c.bench_function("point_queries", |b| {
        b.iter(|| {
            for width in (0..1_600).step_by(50) {
                black_box(tracker.breakpoint_for_width(width));
                black_box(tracker.is_between_at("sm", "lg", width).expect("query"));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_resize_sweep,
    bench_transition_sweep,
    bench_point_queries
);
criterion_main!(benches);
