//! Property tests for the history stack and swipe classification.

use navigation::Direction;
use navigation::gesture::{Point, SwipeConfig, SwipeDetector, classify_swipe};
use navigation::history::{HistoryStack, Observed};
use proptest::prelude::*;

/// Paths drawn from a small alphabet so repeats are likely, with
/// consecutive duplicates removed.
fn path_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(0u8..6, 1..40).prop_map(|ids| {
        let mut paths: Vec<String> = Vec::new();
        for id in ids {
            let path = format!("/app/p{id}");
            if paths.last() != Some(&path) {
                paths.push(path);
            }
        }
        paths
    })
}

proptest! {
    #[test]
    fn can_go_back_iff_more_than_one_visit(paths in path_sequence()) {
        let mut stack = HistoryStack::with_limit(usize::MAX);
        for path in &paths {
            prop_assert_eq!(stack.observe(path), Observed::Visited);
        }
        prop_assert_eq!(stack.can_go_back(), paths.len() > 1);
        prop_assert!(!stack.can_go_forward());
    }

    #[test]
    fn confirmed_backs_walk_to_the_start(paths in path_sequence()) {
        let mut stack = HistoryStack::with_limit(usize::MAX);
        for path in &paths {
            stack.observe(path);
        }
        for step in 1..paths.len() {
            prop_assert_eq!(stack.go_back(), Some(Direction::Back));
            let target = paths[paths.len() - 1 - step].clone();
            prop_assert_eq!(stack.observe(&target), Observed::Moved(Direction::Back));
        }
        prop_assert!(!stack.can_go_back());
        prop_assert_eq!(stack.current(), paths.first().map(String::as_str));
    }

    #[test]
    fn new_visit_after_back_discards_forward(paths in path_sequence(), back_steps in 1usize..10) {
        prop_assume!(paths.len() > 1);
        let mut stack = HistoryStack::with_limit(usize::MAX);
        for path in &paths {
            stack.observe(path);
        }
        let steps = back_steps.min(paths.len() - 1);
        for step in 1..=steps {
            stack.go_back();
            stack.observe(&paths[paths.len() - 1 - step]);
        }
        prop_assert!(stack.can_go_forward());

        stack.observe("/app/fresh");
        prop_assert!(!stack.can_go_forward());
        prop_assert_eq!(stack.len(), paths.len() - steps + 1);
        prop_assert_eq!(stack.current(), Some("/app/fresh"));
    }

    #[test]
    fn bounded_stack_never_exceeds_limit(paths in path_sequence(), limit in 1usize..8) {
        let mut stack = HistoryStack::with_limit(limit);
        for path in &paths {
            stack.observe(path);
            prop_assert!(stack.len() <= limit);
            prop_assert_eq!(stack.current(), Some(path.as_str()));
        }
    }

    #[test]
    fn unconfirmed_requests_never_move_the_index(paths in path_sequence(), requests in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut stack = HistoryStack::with_limit(usize::MAX);
        for path in &paths {
            stack.observe(path);
        }
        let index = stack.index();
        for back in requests {
            if back {
                stack.go_back();
            } else {
                stack.go_forward();
            }
            prop_assert_eq!(stack.index(), index);
        }
    }

    #[test]
    fn vertical_dominant_swipes_never_fire(dx in -400.0f64..400.0, extra in 0.0f64..200.0, ms in 0.0f64..299.0) {
        let dy = dx.abs() + extra;
        let cfg = SwipeConfig::default();
        prop_assert_eq!(classify_swipe(Point::new(0.0, 0.0), Point::new(dx, dy), ms, &cfg), None);
    }

    #[test]
    fn quick_wide_swipes_fire_by_sign(dx in 51.0f64..600.0, dy in 0.0f64..50.0, ms in 0.0f64..299.0, left in any::<bool>()) {
        let dx = if left { -dx } else { dx };
        let mut detector = SwipeDetector::default();
        detector.touch_start(&[Point::new(300.0, 300.0), Point::new(340.0, 300.0)], 0.0);
        let fired = detector.touch_end(Point::new(300.0 + dx, 300.0 + dy), ms);
        let expected = if left { Direction::Forward } else { Direction::Back };
        prop_assert_eq!(fired, Some(expected));
    }
}
