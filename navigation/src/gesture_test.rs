use super::*;

fn two_fingers(x: f64, y: f64) -> [Point; 2] {
    [Point::new(x, y), Point::new(x + 40.0, y)]
}

fn swipe(detector: &mut SwipeDetector, dx: f64, dy: f64, duration_ms: f64) -> Option<Direction> {
    detector.touch_start(&two_fingers(100.0, 100.0), 1_000.0);
    detector.touch_end(Point::new(100.0 + dx, 100.0 + dy), 1_000.0 + duration_ms)
}

// =============================================================
// classify_swipe
// =============================================================

#[test]
fn classify_right_swipe_is_back() {
    let cfg = SwipeConfig::default();
    assert_eq!(classify_swipe(Point::new(0.0, 0.0), Point::new(60.0, 5.0), 100.0, &cfg), Some(Direction::Back));
}

#[test]
fn classify_left_swipe_is_forward() {
    let cfg = SwipeConfig::default();
    assert_eq!(
        classify_swipe(Point::new(100.0, 0.0), Point::new(20.0, 0.0), 100.0, &cfg),
        Some(Direction::Forward)
    );
}

#[test]
fn classify_exact_threshold_does_not_fire() {
    let cfg = SwipeConfig::default();
    assert_eq!(classify_swipe(Point::new(0.0, 0.0), Point::new(50.0, 0.0), 100.0, &cfg), None);
}

#[test]
fn classify_diagonal_dominated_by_vertical_does_not_fire() {
    let cfg = SwipeConfig::default();
    assert_eq!(classify_swipe(Point::new(0.0, 0.0), Point::new(60.0, 80.0), 100.0, &cfg), None);
}

#[test]
fn classify_respects_custom_config() {
    let cfg = SwipeConfig { threshold_px: 20.0, max_duration_ms: 1_000.0 };
    assert_eq!(classify_swipe(Point::new(0.0, 0.0), Point::new(30.0, 0.0), 600.0, &cfg), Some(Direction::Back));
}

// =============================================================
// Touch
// =============================================================

#[test]
fn quick_two_finger_swipe_fires_exactly_once() {
    let mut detector = SwipeDetector::default();
    assert_eq!(swipe(&mut detector, 60.0, 0.0, 200.0), Some(Direction::Back));
    assert_eq!(detector.touch_end(Point::new(200.0, 100.0), 1_250.0), None);
}

#[test]
fn slow_swipe_does_not_fire() {
    let mut detector = SwipeDetector::default();
    assert_eq!(swipe(&mut detector, 60.0, 0.0, 400.0), None);
}

#[test]
fn vertical_swipe_does_not_fire() {
    let mut detector = SwipeDetector::default();
    assert_eq!(swipe(&mut detector, 0.0, 60.0, 200.0), None);
}

#[test]
fn short_swipe_does_not_fire() {
    let mut detector = SwipeDetector::default();
    assert_eq!(swipe(&mut detector, 30.0, 0.0, 200.0), None);
}

#[test]
fn single_finger_does_not_start_gesture() {
    let mut detector = SwipeDetector::default();
    detector.touch_start(&[Point::new(0.0, 0.0)], 0.0);
    assert!(!detector.tracking_touch());
    assert_eq!(detector.touch_end(Point::new(100.0, 0.0), 50.0), None);
}

#[test]
fn three_fingers_clear_tracked_gesture() {
    let mut detector = SwipeDetector::default();
    detector.touch_start(&two_fingers(0.0, 0.0), 0.0);
    assert!(detector.tracking_touch());
    detector.touch_start(&[Point::default(), Point::default(), Point::default()], 10.0);
    assert!(!detector.tracking_touch());
}

#[test]
fn second_finger_landing_starts_gesture() {
    let mut detector = SwipeDetector::default();
    detector.touch_start(&[Point::new(10.0, 10.0)], 0.0);
    detector.touch_start(&two_fingers(10.0, 10.0), 20.0);
    assert_eq!(detector.touch_end(Point::new(-60.0, 12.0), 150.0), Some(Direction::Forward));
}

// =============================================================
// Mouse
// =============================================================

#[test]
fn mouse_button_from_dom_codes() {
    assert_eq!(MouseButton::from_dom(0), Some(MouseButton::Primary));
    assert_eq!(MouseButton::from_dom(1), Some(MouseButton::Middle));
    assert_eq!(MouseButton::from_dom(2), Some(MouseButton::Secondary));
    assert_eq!(MouseButton::from_dom(3), None);
}

#[test]
fn middle_drag_right_is_back() {
    let mut detector = SwipeDetector::default();
    detector.mouse_down(MouseButton::Middle, 200.0);
    assert!(detector.tracking_drag());
    assert_eq!(detector.mouse_up(MouseButton::Middle, 290.0), Some(Direction::Back));
    assert!(!detector.tracking_drag());
}

#[test]
fn middle_drag_left_is_forward() {
    let mut detector = SwipeDetector::default();
    detector.mouse_down(MouseButton::Middle, 200.0);
    assert_eq!(detector.mouse_up(MouseButton::Middle, 100.0), Some(Direction::Forward));
}

#[test]
fn short_middle_drag_does_not_fire() {
    let mut detector = SwipeDetector::default();
    detector.mouse_down(MouseButton::Middle, 200.0);
    assert_eq!(detector.mouse_up(MouseButton::Middle, 240.0), None);
}

#[test]
fn primary_button_never_drags() {
    let mut detector = SwipeDetector::default();
    detector.mouse_down(MouseButton::Primary, 0.0);
    assert!(!detector.tracking_drag());
    assert_eq!(detector.mouse_up(MouseButton::Primary, 500.0), None);
}

#[test]
fn mouse_up_without_down_does_not_fire() {
    let mut detector = SwipeDetector::default();
    assert_eq!(detector.mouse_up(MouseButton::Middle, 500.0), None);
}
