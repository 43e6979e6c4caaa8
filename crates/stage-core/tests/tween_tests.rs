// Host-side tests for easing curves, tweens and the tween scheduler.

use stage_core::{Easing, ItemId, Property, Tween, TweenKey, TweenPhase, TweenScheduler};

const ALL_EASINGS: [Easing; 6] = [
    Easing::Linear,
    Easing::QuadraticInOut,
    Easing::CubicInOut,
    Easing::ExponentialIn,
    Easing::ExponentialOut,
    Easing::ExponentialInOut,
];

#[test]
fn easing_endpoints_are_exact() {
    for e in ALL_EASINGS {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
}

#[test]
fn easing_is_monotonic_and_clamped() {
    for e in ALL_EASINGS {
        let mut prev = e.apply(0.0);
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "{e:?} not increasing at {i}");
            prev = v;
        }
        assert_eq!(e.apply(-1.0), e.apply(0.0));
        assert_eq!(e.apply(2.0), e.apply(1.0));
    }
}

#[test]
fn in_out_easings_cross_midpoint() {
    for e in [
        Easing::QuadraticInOut,
        Easing::CubicInOut,
        Easing::ExponentialInOut,
    ] {
        assert!((e.apply(0.5) - 0.5).abs() < 1e-5, "{e:?}");
    }
}

#[test]
fn tween_respects_delay_then_runs_linearly() {
    let mut t = Tween::new(&[0.0], &[10.0], 100.0).delay(50.0);
    t.advance(25.0);
    assert_eq!(t.phase(), TweenPhase::Delayed);
    assert_eq!(t.progress(), 0.0);

    t.advance(25.0);
    assert_eq!(t.phase(), TweenPhase::Running);
    assert_eq!(t.values()[0], 0.0);

    t.advance(50.0);
    assert!((t.values()[0] - 5.0).abs() < 1e-5);

    t.advance(50.0);
    assert_eq!(t.phase(), TweenPhase::Completed);
    assert_eq!(t.values()[0], 10.0);
}

#[test]
fn tween_lands_exactly_on_destination() {
    let mut t = Tween::new(&[0.1, 3.3, 0.0], &[0.3, 7.7, 1.0], 40.0).easing(Easing::ExponentialInOut);
    t.advance(1000.0);
    assert_eq!(t.values().as_slice(), &[0.3_f32, 7.7, 1.0]);
}

#[test]
fn zero_duration_tween_completes_after_delay() {
    let mut t = Tween::new(&[1.0], &[2.0], 0.0).delay(10.0);
    assert_eq!(t.phase(), TweenPhase::Delayed);
    assert_eq!(t.values()[0], 1.0);
    t.advance(10.0);
    assert_eq!(t.phase(), TweenPhase::Completed);
    assert_eq!(t.values()[0], 2.0);
}

#[test]
fn scheduler_replaces_tween_on_same_key() {
    let mut sched = TweenScheduler::new();
    let key = TweenKey::new(ItemId(1), Property::Opacity);
    assert!(!sched.start(key, Tween::new(&[0.0], &[1.0], 100.0)));
    assert!(sched.start(key, Tween::new(&[0.0], &[0.5], 100.0)));
    assert_eq!(sched.len(), 1);

    sched.advance(100.0);
    let sample = sched.peek(key).expect("tween should be active");
    assert_eq!(sample.values[0], 0.5);
}

#[test]
fn scheduler_poll_reports_completion_once() {
    let mut sched = TweenScheduler::new();
    let key = TweenKey::new(ItemId(0), Property::Follow);
    sched.start(key, Tween::new(&[0.0], &[1.0], 50.0));

    sched.advance(20.0);
    let running = sched.poll(key).expect("running sample");
    assert_eq!(running.phase, TweenPhase::Running);
    assert!(sched.is_active(key));

    sched.advance(40.0);
    let done = sched.poll(key).expect("completed sample");
    assert_eq!(done.phase, TweenPhase::Completed);
    assert_eq!(done.progress, 1.0);
    assert!(sched.poll(key).is_none());
    assert!(sched.is_empty());
}

#[test]
fn scheduler_stop_owner_leaves_other_items_alone() {
    let mut sched = TweenScheduler::new();
    for owner in [ItemId(0), ItemId(1)] {
        for property in [Property::Opacity, Property::Scale, Property::Follow] {
            sched.start(
                TweenKey::new(owner, property),
                Tween::new(&[0.0], &[1.0], 10.0),
            );
        }
    }
    assert_eq!(sched.stop_owner(ItemId(0)), 3);
    assert_eq!(sched.active_for(ItemId(0)), 0);
    assert_eq!(sched.active_for(ItemId(1)), 3);
    assert!(sched.stop(TweenKey::new(ItemId(1), Property::Scale)));
    assert!(!sched.stop(TweenKey::new(ItemId(1), Property::Scale)));
}
