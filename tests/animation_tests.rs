// Host-side tests for timed transitions and the single-owner activity slot.

use glam::{Mat4, Vec3};
use rayslider::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn animated_slider(resolution: Resolution, transition_ms: u64) -> Slider {
    let config = SliderConfig::new("anim", Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0))
        .with_resolution(resolution)
        .with_transition_ms(transition_ms);
    Slider::new(&config, Vec3::ZERO, Mat4::IDENTITY).unwrap()
}

fn run_to_completion(s: &mut Slider) -> usize {
    let mut frames = 0;
    while s.is_animating() {
        s.tick(FRAME);
        frames += 1;
        assert!(frames < 10_000, "animation never finished");
    }
    frames
}

#[test]
fn animation_lands_exactly_on_quantized_target() {
    let mut s = animated_slider(Resolution::Positions(3), 200);
    s.animate_to(0.6).unwrap();
    assert!(s.is_animating());
    let frames = run_to_completion(&mut s);
    assert_eq!(s.value(), 0.5);
    assert_eq!(s.handle_position(), Vec3::new(0.0, 0.0, 1.0));
    // 200ms at 16ms per frame
    assert_eq!(frames, 13);
}

#[test]
fn intermediate_frames_are_not_quantized() {
    let mut s = animated_slider(Resolution::Positions(3), 200);
    s.animate_to(1.0).unwrap();
    assert!(s.tick(Duration::from_millis(50)));
    assert!((s.value() - 0.25).abs() < 1e-5);
    assert!(s.is_animating());
}

#[test]
fn downward_animation_is_linear() {
    let mut s = animated_slider(Resolution::Unbounded, 100);
    s.set_value(1.0).unwrap();
    s.animate_to(0.0).unwrap();
    s.tick(Duration::from_millis(25));
    assert!((s.value() - 0.75).abs() < 1e-5);
    s.tick(Duration::from_millis(25));
    assert!((s.value() - 0.5).abs() < 1e-5);
    s.tick(Duration::from_millis(100));
    assert_eq!(s.value(), 0.0);
    assert!(!s.is_animating());
}

#[test]
fn zero_transition_applies_immediately() {
    let mut s = animated_slider(Resolution::Positions(5), 0);
    s.animate_to(0.3).unwrap();
    assert!(!s.is_animating());
    assert_eq!(s.value(), 0.25);
    assert!(!s.tick(FRAME));
}

#[test]
fn new_animation_supersedes_running_one() {
    let mut s = animated_slider(Resolution::Unbounded, 400);
    s.animate_to(1.0).unwrap();
    s.tick(Duration::from_millis(100));
    let midway = s.value();
    assert!(midway > 0.0 && midway < 1.0);

    s.animate_to(0.0).unwrap();
    s.tick(FRAME);
    assert!(s.value() < midway);
    run_to_completion(&mut s);
    assert_eq!(s.value(), 0.0);
}

#[test]
fn drag_cancels_animation() {
    let mut s = animated_slider(Resolution::Unbounded, 400);
    s.animate_to(1.0).unwrap();
    s.tick(Duration::from_millis(100));
    let at_grab = s.value();

    let mut events = Vec::new();
    let pose = Pose::new(Vec3::new(0.0, 1.0, 0.3), Vec3::NEG_Y);
    s.begin_drag(&pose, &mut events);
    assert!(!s.is_animating());
    assert_eq!(events, vec![SliderEvent::DragStart { value: at_grab }]);

    assert!(!s.tick(Duration::from_secs(1)));
    assert_eq!(s.value(), at_grab);
}

#[test]
fn value_attribute_starts_transition() {
    let mut s = animated_slider(Resolution::Unbounded, 300);
    s.set_attribute(Attribute::Value, AttributeValue::Float(0.8))
        .unwrap();
    assert!(s.is_animating());
    run_to_completion(&mut s);
    assert_eq!(s.value(), 0.8);
}

#[test]
fn set_value_stops_animation() {
    let mut s = animated_slider(Resolution::Unbounded, 300);
    s.animate_to(1.0).unwrap();
    s.tick(FRAME);
    s.set_value(0.1).unwrap();
    assert!(!s.is_animating());
    assert!(!s.tick(FRAME));
    assert_eq!(s.value(), 0.1);
}

#[test]
fn animation_to_current_value_does_not_schedule() {
    let mut s = animated_slider(Resolution::Unbounded, 300);
    s.set_value(0.5).unwrap();
    s.animate_to(0.5).unwrap();
    assert!(!s.is_animating());
}

#[test]
fn frame_clock_reports_elapsed_time() {
    let mut clock = FrameClock::new();
    std::thread::sleep(Duration::from_millis(5));
    let dt = clock.tick();
    assert!(dt >= Duration::from_millis(5));
    let dt2 = clock.tick();
    assert!(dt2 < dt + Duration::from_secs(1));
}
