// Host-side tests for the sibling page layouts: spiral carousel placement,
// the drag-to-launch band and scroll-offset flow planes.

use glam::Vec2;
use stage_core::*;

fn falloff(d_index: f32) -> f32 {
    let d_progress = d_index * SPIRAL_ITEM_SPACING;
    (1.0 + (0.5 - d_progress - SPIRAL_ZERO_PROGRESS_OFFSET) * SPIRAL_SCALE_FALLOFF)
        .powf(SPIRAL_SCALE_EXPONENT)
}

#[test]
fn focused_spiral_item_sits_at_zero_progress_offset() {
    let scroll = ScrollTracker::new(5);
    let slot = scroll.item_layout(0);
    assert_eq!(slot.d_index, 0.0);
    assert_eq!(slot.spline_progress, SPIRAL_ZERO_PROGRESS_OFFSET);
    assert_eq!(slot.scale, 1.0);

    let slot = scroll.item_layout(3);
    assert_eq!(slot.d_index, 3.0);
    assert!((slot.spline_progress - (3.0 * SPIRAL_ITEM_SPACING + 0.25)).abs() < 1e-6);
}

#[test]
fn spiral_scale_falls_off_without_nan() {
    let scroll = ScrollTracker::new(20);
    assert_eq!(scroll.layout().count(), 20);

    let mut prev = f32::INFINITY;
    for slot in scroll.layout() {
        assert!(slot.scale.is_finite());
        assert!((0.0..=1.0).contains(&slot.scale));
        assert!(slot.scale <= prev);
        prev = slot.scale;
    }

    let partial = scroll.item_layout(6).scale;
    assert!(partial > 0.0 && partial < 1.0);
    assert!((partial - falloff(6.0)).abs() < 1e-5);
    // negative base clamps to zero
    assert_eq!(scroll.item_layout(10).scale, 0.0);
}

#[test]
fn spiral_layout_follows_scroll_index() {
    let mut scroll = ScrollTracker::new(5);
    scroll.apply_scroll(-500.0);
    for _ in 0..300 {
        scroll.update(1.0);
    }
    let slot = scroll.item_layout(2);
    assert!(slot.d_index.abs() < 1e-3);
    assert!((slot.spline_progress - SPIRAL_ZERO_PROGRESS_OFFSET).abs() < 1e-3);
    assert!(scroll.item_layout(0).d_index < -1.9);
}

#[test]
fn catapult_power_grows_with_drag_distance() {
    let mut band = Catapult::default();
    assert_eq!(band.power(), None);
    assert_eq!(band.band(), None);

    band.move_to(Vec2::new(500.0, 500.0));
    band.press(Vec2::new(10.0, 10.0));
    assert!(band.is_touching());
    assert_eq!(band.power(), Some(0.0));

    band.move_to(Vec2::new(40.0, 50.0));
    assert_eq!(
        band.band(),
        Some((Vec2::new(10.0, 10.0), Vec2::new(40.0, 50.0)))
    );
    let power = band.power().expect("held");
    assert!((power - 50.0 * CATAPULT_POWER_FACTOR).abs() < 1e-5);

    let launched = band.release().expect("held");
    assert!((launched - power).abs() < 1e-6);
    assert!(!band.is_touching());
    assert_eq!(band.power(), None);
    assert_eq!(band.release(), None);
}

#[test]
fn flow_plane_shifts_with_scroll_offset() {
    let vp = Viewport::new(1200.0, 800.0);
    let plane = FlowPlane::new(Rect::new(100.0, 900.0, 300.0, 200.0));
    assert_eq!(plane.position(vp, 0.0), Vec2::new(-350.0, -600.0));
    assert_eq!(plane.position(vp, 250.0), Vec2::new(-350.0, -850.0));
    assert_eq!(plane.position(vp, -900.0), Vec2::new(-350.0, 300.0));
}

#[test]
fn flow_layout_applies_one_offset_to_every_plane() {
    let vp = Viewport::new(1200.0, 800.0);
    let mut flow = FlowLayout::new();
    flow.push(Rect::new(0.0, 0.0, 100.0, 100.0));
    flow.push(Rect::new(0.0, 400.0, 100.0, 100.0));
    let before: Vec<Vec2> = flow.positions(vp).collect();

    flow.set_offset(120.0);
    let after: Vec<Vec2> = flow.positions(vp).collect();
    assert_eq!(after.len(), 2);
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y - 120.0);
    }

    flow.clear();
    assert!(flow.is_empty());
}
