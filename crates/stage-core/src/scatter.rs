//! Random scatter positions outside the central exclusion zone.

use crate::config::TrackingConfig;
use crate::constants::SCATTER_FALLBACK_MARGIN;
use crate::geometry::Viewport;
use glam::Vec2;
use rand::Rng;

/// Half extents of the exclusion zone for `viewport`.
#[inline]
pub fn exclusion_zone(viewport: Viewport, config: &TrackingConfig) -> Vec2 {
    Vec2::new(
        viewport.width * config.exclusion_width_fraction,
        viewport.height * config.exclusion_height_fraction,
    )
}

#[inline]
pub fn in_exclusion_zone(p: Vec2, zone: Vec2) -> bool {
    p.x.abs() <= zone.x && p.y.abs() <= zone.y
}

#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Draw a displacement for an item of `size` that lands outside the
/// exclusion zone. Sampling is bounded by `config.scatter_max_attempts`;
/// past that the last candidate is pushed just beyond the zone edge on x.
pub fn scatter_point<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
    size: Vec2,
    config: &TrackingConfig,
) -> Vec2 {
    let zone = exclusion_zone(viewport, config);
    let mut candidate = Vec2::ZERO;
    for _ in 0..config.scatter_max_attempts {
        let rx: f32 = rng.gen_range(-1.0..1.0);
        let ry: f32 = rng.gen_range(-1.0..1.0);
        candidate = Vec2::new(
            rx * viewport.width * 0.5 - size.x * sign(rx),
            ry * viewport.height * 0.5 - size.y * sign(ry),
        );
        if !in_exclusion_zone(candidate, zone) {
            return candidate;
        }
    }
    log::warn!(
        "[scatter] no point outside zone after {} draws (viewport {}x{}); using zone edge",
        config.scatter_max_attempts,
        viewport.width,
        viewport.height
    );
    Vec2::new(
        sign(candidate.x) * (zone.x + SCATTER_FALLBACK_MARGIN),
        candidate.y,
    )
}
