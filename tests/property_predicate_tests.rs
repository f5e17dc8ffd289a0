use breakpoints_rs::api::BreakpointTracker;
use breakpoints_rs::core::DEFAULT_BREAKPOINTS;
use breakpoints_rs::{StaticHost, TrackerConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn up_and_down_are_complementary(width in 0u32..5_000) {
        let tracker = BreakpointTracker::with_defaults(StaticHost::bootstrap(0)).expect("tracker");
        for tier in DEFAULT_BREAKPOINTS {
            let up = tracker.is_up_at(tier, width).expect("up");
            let down = tracker.is_down_at(tier, width).expect("down");
            prop_assert!(up != down);
        }
    }

    #[test]
    fn at_most_one_tier_is_active(width in 0u32..5_000) {
        let tracker = BreakpointTracker::with_defaults(StaticHost::bootstrap(0)).expect("tracker");
        let active = DEFAULT_BREAKPOINTS
            .iter()
            .filter(|tier| tracker.is_only_at(tier, width).expect("only"))
            .count();
        prop_assert!(active <= 1);
        // The bottom tier never matches and lower edges of bounded bands
        // are exclusive.
        if width <= 576 || [768, 992].contains(&width) {
            prop_assert_eq!(active, 0);
        } else {
            prop_assert_eq!(active, 1);
        }
    }

    #[test]
    fn current_tier_is_highest_reached_threshold(
        thresholds in proptest::collection::btree_set(1u32..4_000, 3),
        width in 0u32..5_000
    ) {
        let ordered: Vec<u32> = std::iter::once(0).chain(thresholds).collect();
        let tiers = ["t0", "t1", "t2", "t3"];
        let host = StaticHost::new(width)
            .with_thresholds(tiers.iter().copied().zip(ordered.iter().copied()));
        let config = TrackerConfig::new().with_breakpoints(tiers);
        let tracker = BreakpointTracker::new(host, config).expect("tracker");

        let expected = tiers
            .iter()
            .zip(&ordered)
            .filter(|(_, min)| width >= **min)
            .map(|(tier, _)| *tier)
            .last();
        prop_assert_eq!(tracker.current_breakpoint(), expected);
        prop_assert!(tracker.is_between_at("t0", "t3", width).expect("unbounded"));
        prop_assert_eq!(
            tracker.is_between_at("t0", "t2", width).expect("open bottom"),
            tracker.is_down_at("t2", width).expect("down")
        );
    }
}
