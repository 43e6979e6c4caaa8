// Host-side tests for the scene driver, configuration, scroll tracking and
// frame timing.

use glam::Vec2;
use stage_core::*;
use std::time::Duration;

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0)
}

fn make_stage(rects: &[Rect]) -> (Stage<SharedBounds>, Vec<ItemId>) {
    let mut stage = Stage::new(TrackingConfig::default(), viewport(), 42).expect("valid config");
    let ids = rects
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let id = stage.push(SharedBounds::new(*r));
            stage
                .attach_mesh(id, PlaneMesh::new(MeshHandle(i as u32)))
                .expect("item exists");
            id
        })
        .collect();
    (stage, ids)
}

#[test]
fn items_get_sequential_keys() {
    let (stage, ids) = make_stage(&[
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(20.0, 0.0, 10.0, 10.0),
        Rect::new(40.0, 0.0, 10.0, 10.0),
    ]);
    let keys: Vec<u32> = ids.iter().map(|id| stage.item(*id).unwrap().key()).collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert_eq!(stage.meshes().count(), 3);
}

#[test]
fn unknown_item_is_an_error() {
    let (mut stage, _) = make_stage(&[Rect::new(0.0, 0.0, 10.0, 10.0)]);
    let missing = ItemId(99);
    assert_eq!(stage.item(missing).err(), Some(StageError::UnknownItem(missing)));
    let err = stage
        .attach_mesh(missing, PlaneMesh::new(MeshHandle(5)))
        .unwrap_err();
    assert_eq!(err.to_string(), "no tracked item #99");
    assert!(stage.set_item_following(missing, true).is_err());
}

#[test]
fn invalid_config_is_rejected() {
    let config = TrackingConfig {
        follow_rate_quotient: 1.5,
        ..TrackingConfig::default()
    };
    let result = Stage::<SharedBounds>::new(config, viewport(), 1);
    assert!(matches!(result, Err(StageError::InvalidConfig(_))));

    let config = TrackingConfig {
        scatter_max_attempts: 0,
        ..TrackingConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(TrackingConfig::default().validate().is_ok());
}

#[test]
fn non_finite_config_values_are_rejected() {
    let nan_scale = TrackingConfig {
        follow_scale: f32::NAN,
        ..TrackingConfig::default()
    };
    assert!(nan_scale.validate().is_err());

    let endless = TrackingConfig {
        follow_out_duration_ms: f32::INFINITY,
        ..TrackingConfig::default()
    };
    assert!(endless.validate().is_err());

    let nan_delay = TrackingConfig {
        follow_in_delay_per_key_ms: f32::NAN,
        ..TrackingConfig::default()
    };
    assert!(nan_delay.validate().is_err());

    let nan_rate = TrackingConfig {
        idle_rate: f32::NAN,
        ..TrackingConfig::default()
    };
    assert!(nan_rate.validate().is_err());
}

#[test]
fn config_overrides_keep_unspecified_defaults() {
    let config: TrackingConfig =
        serde_json::from_str(r#"{ "follow_scale": 2.5, "enter_duration_ms": 900 }"#).unwrap();
    assert_eq!(config.follow_scale, 2.5);
    assert_eq!(config.enter_duration_ms, 900.0);
    assert_eq!(config.idle_rate, IDLE_LERP_RATE);
    assert_eq!(config.scatter_max_attempts, SCATTER_MAX_ATTEMPTS);
}

#[test]
fn scheduler_advances_before_items_tick() {
    let (mut stage, ids) = make_stage(&[Rect::new(500.0, 300.0, 200.0, 150.0)]);
    stage.animate_enter_all();
    // 100 frames of 15ms land exactly on the 1500ms enter duration
    let frame = FrameInfo::from_delta(15.0);
    for _ in 0..99 {
        stage.frame(&frame);
    }
    assert!(!stage.item(ids[0]).unwrap().is_animated_in());
    stage.frame(&frame);
    assert!(stage.item(ids[0]).unwrap().is_animated_in());
}

#[test]
fn set_following_fans_out_to_every_item() {
    let (mut stage, ids) = make_stage(&[
        Rect::new(100.0, 100.0, 100.0, 100.0),
        Rect::new(300.0, 100.0, 100.0, 100.0),
    ]);
    stage.set_following(true);
    assert_eq!(stage.scheduler().len(), 4);

    let frame = FrameInfo::from_delta(REFERENCE_FRAME_MS);
    for _ in 0..120 {
        stage.frame(&frame);
    }
    for id in &ids {
        assert_eq!(stage.item(*id).unwrap().follow_progress(), 1.0);
    }
    assert!(stage.scheduler().is_empty());
}

#[test]
fn pointer_is_forwarded_to_items() {
    let (mut stage, ids) = make_stage(&[Rect::new(100.0, 100.0, 100.0, 100.0)]);
    stage.set_pointer(Vec2::new(400.0, 300.0));
    let target = stage.item(ids[0]).unwrap().pointer().target;
    assert_eq!(target, Vec2::new(-400.0 + 150.0, 300.0 - 150.0));
}

#[test]
fn pick_prefers_last_inserted_item() {
    let (stage, ids) = make_stage(&[
        Rect::new(100.0, 100.0, 200.0, 200.0),
        Rect::new(200.0, 200.0, 200.0, 200.0),
        Rect::new(800.0, 500.0, 100.0, 100.0),
    ]);
    assert_eq!(stage.pick(Vec2::new(150.0, 150.0)), Some(ids[0]));
    assert_eq!(stage.pick(Vec2::new(250.0, 250.0)), Some(ids[1]));
    assert_eq!(stage.pick(Vec2::new(850.0, 550.0)), Some(ids[2]));
    assert_eq!(stage.pick(Vec2::new(5.0, 5.0)), None);
}

#[test]
fn remove_stops_item_tweens() {
    let (mut stage, ids) = make_stage(&[
        Rect::new(100.0, 100.0, 100.0, 100.0),
        Rect::new(300.0, 100.0, 100.0, 100.0),
    ]);
    stage.animate_enter_all();
    let removed = stage.remove(ids[0]).expect("item exists");
    assert!(!removed.is_attached());
    assert_eq!(stage.scheduler().active_for(ids[0]), 0);
    assert_eq!(stage.scheduler().active_for(ids[1]), 2);
    assert_eq!(stage.len(), 1);
    assert!(stage.remove(ids[0]).is_err());

    // keys are not renumbered
    assert_eq!(stage.item(ids[1]).unwrap().key(), 2);
}

#[test]
fn resize_updates_every_item() {
    let (mut stage, ids) = make_stage(&[Rect::new(100.0, 100.0, 100.0, 100.0)]);
    let vp = Viewport::new(640.0, 480.0);
    stage.on_resize(vp);
    assert_eq!(stage.viewport(), vp);
    let item = stage.item(ids[0]).unwrap();
    assert_eq!(item.viewport(), vp);
    let t = item.offsets().translate_delta;
    assert!(!(t.x.abs() <= 128.0 && t.y.abs() <= 120.0));
}

#[test]
fn destroy_clears_stage() {
    let (mut stage, _) = make_stage(&[Rect::new(100.0, 100.0, 100.0, 100.0)]);
    stage.set_following(true);
    stage.destroy();
    assert!(stage.is_empty());
    assert!(stage.scheduler().is_empty());
}

#[test]
fn stages_with_same_seed_scatter_identically() {
    let rect = Rect::new(100.0, 100.0, 100.0, 100.0);
    let (mut a, ids_a) = make_stage(&[rect, rect]);
    let (mut b, ids_b) = make_stage(&[rect, rect]);
    a.on_resize(viewport());
    b.on_resize(viewport());
    for (ia, ib) in ids_a.iter().zip(&ids_b) {
        assert_eq!(
            a.item(*ia).unwrap().offsets(),
            b.item(*ib).unwrap().offsets()
        );
    }
    assert_ne!(
        a.item(ids_a[0]).unwrap().offsets(),
        a.item(ids_a[1]).unwrap().offsets()
    );
}

#[test]
fn scroll_target_is_clamped_to_item_range() {
    let mut scroll = ScrollTracker::new(5);
    scroll.apply_scroll(-1000.0);
    assert_eq!(scroll.target(), 4.0);
    scroll.apply_scroll(-10_000.0);
    assert_eq!(scroll.target(), 4.0);
    scroll.apply_scroll(500.0);
    assert!((scroll.target() - 2.0).abs() < 1e-5);
    scroll.apply_scroll(1e6);
    assert_eq!(scroll.target(), 0.0);

    let mut empty = ScrollTracker::new(0);
    empty.apply_scroll(-1000.0);
    assert_eq!(empty.target(), 0.0);
}

#[test]
fn scroll_current_eases_toward_target() {
    let mut scroll = ScrollTracker::new(10);
    scroll.apply_scroll(-750.0);
    let target = scroll.target();
    let mut prev = scroll.current();
    for _ in 0..200 {
        scroll.update(1.0);
        assert!(scroll.current() >= prev);
        prev = scroll.current();
    }
    assert!((scroll.current() - target).abs() < 1e-3);

    scroll.set_item_count(2);
    assert_eq!(scroll.target(), 1.0);
}

#[test]
fn frame_clock_clamps_and_counts() {
    let mut clock = FrameClock::new();
    let t0 = instant::Instant::now();

    let first = clock.tick_at(t0);
    assert_eq!(first.frame_index, 0);
    assert!((first.slow_down_factor - 1.0).abs() < 1e-6);

    let second = clock.tick_at(t0 + Duration::from_millis(33));
    assert!((second.delta_ms - 33.0).abs() < 0.01);
    assert!((second.slow_down_factor - 1.98).abs() < 0.01);
    assert_eq!(second.frame_index, 1);

    let stalled = clock.tick_at(t0 + Duration::from_secs(10));
    assert_eq!(stalled.delta_ms, FRAME_DT_MAX_MS);

    let same = clock.tick_at(t0 + Duration::from_secs(10));
    assert_eq!(same.delta_ms, FRAME_DT_MIN_MS);
    assert!(same.elapsed_ms > stalled.elapsed_ms);
}
