//! A plane mesh bound to a DOM element.
//!
//! `TrackedItem` keeps the element's bounding box, a smoothed pursuit of the
//! pointer and the additive offsets written by its animations, and folds
//! them into the attached mesh's transform once per frame. Tweens live in the
//! scene's [`TweenScheduler`], which every animating call receives
//! explicitly.
//!
//! Position, in centered renderer space (y up):
//!
//! ```text
//! anchor = (left - W/2 + scale.x/2, -top + H/2 - scale.y/2)
//! pos    = anchor - base - scale_delta
//!          - translate_delta * (1 - follow) + pointer * (1 - follow)
//! ```
//!
//! With `follow == 1` the pointer term vanishes and the plane sits on its
//! DOM anchor.

use crate::bounds::BoundsSource;
use crate::config::TrackingConfig;
use crate::constants::CARD_COLLIDER_TAG;
use crate::easing::Easing;
use crate::frame::FrameInfo;
use crate::geometry::{Rect, Viewport};
use crate::mesh::{MeshSlot, PlaneMesh};
use crate::pointer::{Direction, PointerState, Smoothed};
use crate::scatter::scatter_point;
use crate::scheduler::{ItemId, Property, TweenKey, TweenSample, TweenScheduler};
use crate::tween::{Tween, TweenPhase};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::PI;

/// Ordering key (1-based position in the group) and tuning of one item.
#[derive(Clone, Debug)]
pub struct FollowDescriptor {
    pub key: u32,
    pub config: TrackingConfig,
}

impl FollowDescriptor {
    pub fn new(key: u32, config: TrackingConfig) -> Self {
        Self { key, config }
    }
}

/// Additive corrections layered on the DOM-derived transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformOffset {
    pub base: Vec2,
    pub scale_delta: Vec2,
    pub translate_delta: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityAnimation {
    pub destination: f32,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: Easing,
}

impl OpacityAnimation {
    pub fn new(destination: f32, duration_ms: f32) -> Self {
        Self {
            destination,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// How the running `Property::Scale` tween is interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ScaleMotion {
    /// Plain scale change; offsets keep the DOM center fixed.
    Resize,
    /// Reveal: the single channel is progress. The end size is read from
    /// the live DOM bounds each tick, so a resize mid-reveal retargets it.
    Enter { start: Vec2, start_offset: Vec2 },
}

pub struct TrackedItem<S: BoundsSource> {
    id: ItemId,
    source: S,
    descriptor: FollowDescriptor,
    collider_tag: &'static str,
    viewport: Viewport,
    dom_bounds: Rect,
    child_bounds: Rect,
    pointer: PointerState,
    rate: Smoothed,
    offsets: TransformOffset,
    follow_progress: f32,
    follow_destination: f32,
    is_following: bool,
    is_animated_in: bool,
    tween_opacity: f32,
    scale_motion: Option<ScaleMotion>,
    mesh: MeshSlot,
    rng: StdRng,
}

impl<S: BoundsSource> TrackedItem<S> {
    pub fn new(
        id: ItemId,
        source: S,
        descriptor: FollowDescriptor,
        viewport: Viewport,
        seed: u64,
    ) -> Self {
        let dom_bounds = source.bounds();
        let child_bounds = source.child_bounds();
        let idle_rate = descriptor.config.idle_rate;
        Self {
            id,
            source,
            descriptor,
            collider_tag: CARD_COLLIDER_TAG,
            viewport,
            dom_bounds,
            child_bounds,
            pointer: PointerState::default(),
            rate: Smoothed::new(idle_rate),
            offsets: TransformOffset::default(),
            follow_progress: 0.0,
            follow_destination: 0.0,
            is_following: true,
            is_animated_in: false,
            tween_opacity: 0.0,
            scale_motion: None,
            mesh: MeshSlot::Unattached,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn key(&self) -> u32 {
        self.descriptor.key
    }

    pub fn collider_tag(&self) -> &'static str {
        self.collider_tag
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dom_bounds(&self) -> Rect {
        self.dom_bounds
    }

    pub fn child_bounds(&self) -> Rect {
        self.child_bounds
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Last classified pointer direction. Not consumed by the mesh output.
    pub fn direction(&self) -> Direction {
        self.pointer.direction
    }

    pub fn offsets(&self) -> TransformOffset {
        self.offsets
    }

    pub fn follow_progress(&self) -> f32 {
        self.follow_progress
    }

    pub fn is_following(&self) -> bool {
        self.is_following
    }

    pub fn is_animated_in(&self) -> bool {
        self.is_animated_in
    }

    pub fn opacity(&self) -> f32 {
        self.tween_opacity
    }

    pub fn smoothing_rate(&self) -> Smoothed {
        self.rate
    }

    pub fn mesh(&self) -> Option<&PlaneMesh> {
        self.mesh.get()
    }

    pub fn is_attached(&self) -> bool {
        self.mesh.is_attached()
    }

    fn tween_key(&self, property: Property) -> TweenKey {
        TweenKey::new(self.id, property)
    }

    /// Attach the renderer mesh. Scale, plane size and position are applied
    /// right away so the first rendered frame is already in place.
    pub fn attach_mesh(&mut self, mesh: PlaneMesh) -> Option<PlaneMesh> {
        let previous = self.mesh.attach(mesh);
        let opacity = self.tween_opacity;
        let dom = self.dom_bounds.size();
        // a follow-in that ran while unattached could not scale the mesh
        let scale = if self.follow_destination == 1.0 {
            dom * self.descriptor.config.follow_scale
        } else {
            dom
        };
        if let Some(mesh) = self.mesh.get_mut() {
            mesh.transform.scale = scale;
            mesh.uniforms.plane_size = dom.to_array();
            mesh.uniforms.opacity = opacity;
            self.offsets.scale_delta =
                Vec2::new(-(dom.x - scale.x) * 0.5, (dom.y - scale.y) * 0.5);
        }
        self.update_position();
        previous
    }

    pub fn detach_mesh(&mut self) -> Option<PlaneMesh> {
        self.mesh.detach()
    }

    /// Re-sample the element bounds and snap the mesh to them.
    pub fn refresh_bounds(&mut self) {
        self.dom_bounds = self.source.bounds();
        self.child_bounds = self.source.child_bounds();

        let size = self.dom_bounds.size();
        if let Some(mesh) = self.mesh.get_mut() {
            mesh.transform.scale = size;
            mesh.uniforms.plane_size = size.to_array();
            // scale equals the DOM size, so there is nothing to compensate
            self.offsets.scale_delta = Vec2::ZERO;
        }
        // uses pointer.current, not target: no lag jump on resize
        self.update_position();
    }

    /// Reset offsets and pick a new scattered displacement.
    pub fn scatter_randomly(&mut self) {
        self.offsets.base = Vec2::ZERO;
        self.offsets.scale_delta = Vec2::ZERO;
        self.offsets.translate_delta = self.random_scatter_point();
    }

    fn random_scatter_point(&mut self) -> Vec2 {
        scatter_point(
            &mut self.rng,
            self.viewport,
            self.dom_bounds.size(),
            &self.descriptor.config,
        )
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.refresh_bounds();
        self.scatter_randomly();
        // a reveal in flight collapses from the new scatter point
        if let Some(ScaleMotion::Enter { start_offset, .. }) = &mut self.scale_motion {
            *start_offset = self.offsets.translate_delta;
        }
        self.update_position();
        log::debug!(
            "[item {}] resized to {}x{}, scatter {:?}",
            self.id,
            viewport.width,
            viewport.height,
            self.offsets.translate_delta
        );
    }

    /// Mesh position for the given mesh `scale`.
    pub fn position_for(&self, scale: Vec2) -> Vec2 {
        let b = &self.dom_bounds;
        let vp = &self.viewport;
        let anchor = Vec2::new(
            b.left() - vp.width * 0.5 + scale.x * 0.5,
            -b.top() + vp.height * 0.5 - scale.y * 0.5,
        );
        let free = 1.0 - self.follow_progress;
        anchor - self.offsets.base - self.offsets.scale_delta - self.offsets.translate_delta * free
            + self.pointer.current * free
    }

    fn update_position(&mut self) {
        let Some(scale) = self.mesh.get().map(|m| m.transform.scale) else {
            return;
        };
        let position = self.position_for(scale);
        if let Some(mesh) = self.mesh.get_mut() {
            mesh.transform.position = position;
        }
    }

    /// Feed a pointer position in viewport (client) coordinates. Ignored
    /// while not following.
    pub fn set_target_pointer(&mut self, p: Vec2) {
        if !self.is_following {
            return;
        }
        let b = &self.dom_bounds;
        self.pointer.target = Vec2::new(
            -p.x + b.left() + b.width * 0.5,
            p.y - b.top() - b.height * 0.5,
        );
    }

    pub fn animate_opacity(&mut self, scheduler: &mut TweenScheduler, anim: OpacityAnimation) {
        let tween = Tween::new(&[self.tween_opacity], &[anim.destination], anim.duration_ms)
            .delay(anim.delay_ms)
            .easing(anim.easing);
        scheduler.start(self.tween_key(Property::Opacity), tween);
    }

    /// One-time reveal: random tilt, fade in, grow from the child's size to
    /// the DOM size while the scattered start offset collapses to zero.
    pub fn animate_enter(&mut self, scheduler: &mut TweenScheduler) {
        if !self.mesh.is_attached() {
            return;
        }
        let cfg = &self.descriptor.config;
        let duration = cfg.enter_duration_ms;
        let tilt_factor = cfg.enter_tilt_factor;
        let opacity = cfg.default_opacity;

        let tilt = self.rng.gen_range(-PI..PI) * tilt_factor;
        if let Some(mesh) = self.mesh.get_mut() {
            mesh.transform.rotation_z = tilt;
        }

        let start_offset = self.random_scatter_point();
        let start = self.child_bounds.size();

        self.animate_opacity(
            scheduler,
            OpacityAnimation::new(opacity, duration).easing(Easing::ExponentialInOut),
        );

        let tween = Tween::new(&[0.0], &[1.0], duration).easing(Easing::ExponentialInOut);
        scheduler.start(self.tween_key(Property::Scale), tween);
        self.scale_motion = Some(ScaleMotion::Enter {
            start,
            start_offset,
        });
    }

    pub fn scale_to(
        &mut self,
        scheduler: &mut TweenScheduler,
        size: Vec2,
        delay_ms: f32,
        duration_ms: f32,
        easing: Easing,
    ) {
        let Some(from) = self.mesh.get().map(|m| m.transform.scale) else {
            return;
        };
        let tween = Tween::new(&[from.x, from.y], &[size.x, size.y], duration_ms)
            .delay(delay_ms)
            .easing(easing);
        scheduler.start(self.tween_key(Property::Scale), tween);
        self.scale_motion = Some(ScaleMotion::Resize);
    }

    fn animate_follow(
        &mut self,
        scheduler: &mut TweenScheduler,
        destination: f32,
        delay_ms: f32,
        duration_ms: f32,
    ) {
        let tween = Tween::new(&[self.follow_progress], &[destination], duration_ms)
            .delay(delay_ms)
            .easing(Easing::ExponentialInOut);
        scheduler.start(self.tween_key(Property::Follow), tween);
        self.follow_destination = destination;
    }

    /// Enter or leave follow mode. Delays grow with the item's key so a
    /// group fans in and out one item after another.
    pub fn set_following(&mut self, scheduler: &mut TweenScheduler, enabled: bool) {
        let cfg = &self.descriptor.config;
        let key = self.descriptor.key as f32;
        let dom = self.dom_bounds.size();

        if enabled {
            self.rate.target = cfg.follow_rate(self.descriptor.key);
            let delay = key * cfg.follow_in_delay_per_key_ms;
            let duration = cfg.follow_in_duration_ms;
            let size = dom * cfg.follow_scale;
            self.scale_to(scheduler, size, delay, duration, Easing::ExponentialInOut);
            self.animate_follow(scheduler, 1.0, delay, duration);
        } else {
            self.rate.target = cfg.idle_rate;
            let delay = key * cfg.follow_out_delay_per_key_ms;
            let duration = cfg.follow_out_duration_ms;
            self.pointer.freeze();
            self.scale_to(scheduler, dom, delay, duration, Easing::ExponentialInOut);
            self.animate_follow(scheduler, 0.0, delay, duration);
        }
        log::debug!(
            "[item {}] following={} rate_target={:.4}",
            self.id,
            enabled,
            self.rate.target
        );
    }

    fn apply_tweens(&mut self, scheduler: &mut TweenScheduler) {
        if let Some(s) = scheduler.poll(self.tween_key(Property::Opacity)) {
            if s.phase != TweenPhase::Delayed {
                self.tween_opacity = s.values[0];
            }
        }

        if let Some(s) = scheduler.poll(self.tween_key(Property::Follow)) {
            match s.phase {
                TweenPhase::Delayed => {}
                TweenPhase::Running => {
                    self.is_following = self.follow_destination != 0.0;
                    self.follow_progress = s.values[0];
                }
                TweenPhase::Completed => {
                    self.follow_progress = s.values[0];
                    self.is_following = true;
                }
            }
        }

        if let Some(s) = scheduler.poll(self.tween_key(Property::Scale)) {
            if s.phase != TweenPhase::Delayed {
                self.apply_scale(&s);
            }
        }
    }

    fn apply_scale(&mut self, sample: &TweenSample) {
        let completed = sample.phase == TweenPhase::Completed;
        let motion = self.scale_motion;
        if completed {
            self.scale_motion = None;
        }
        let Some(mesh) = self.mesh.get_mut() else {
            return;
        };
        let dom = self.dom_bounds.size();
        let scale = match motion {
            Some(ScaleMotion::Enter {
                start,
                start_offset,
            }) => {
                let progress = if completed { 1.0 } else { sample.values[0] };
                self.offsets.translate_delta = start_offset * (1.0 - progress);
                if completed {
                    self.is_animated_in = true;
                    dom
                } else {
                    start.lerp(dom, progress)
                }
            }
            Some(ScaleMotion::Resize) | None => Vec2::new(sample.values[0], sample.values[1]),
        };
        self.offsets.scale_delta = Vec2::new(-(dom.x - scale.x) * 0.5, (dom.y - scale.y) * 0.5);
        mesh.transform.scale = scale;
    }

    /// Advance one frame. The scheduler must already have been advanced for
    /// this frame.
    pub fn tick(&mut self, scheduler: &mut TweenScheduler, frame: &FrameInfo) {
        self.apply_tweens(scheduler);

        let rate = (self.rate.current * frame.slow_down_factor).min(1.0);
        self.pointer.pursue(rate);
        self.update_position();

        let rate_smoothing = self.descriptor.config.rate_smoothing;
        self.rate
            .step((rate_smoothing * frame.slow_down_factor).min(1.0));

        let strength = self.pointer.strength.current * self.follow_progress;
        let opacity = self.tween_opacity;
        if let Some(mesh) = self.mesh.get_mut() {
            mesh.uniforms.strength = strength;
            mesh.uniforms.opacity = opacity;
        }
    }

    /// Hit test a point in centered renderer space against the mesh
    /// rectangle. Rotation is ignored.
    pub fn contains(&self, p: Vec2) -> bool {
        let Some(mesh) = self.mesh.get() else {
            return false;
        };
        let half = mesh.transform.scale.abs() * 0.5;
        let d = (p - mesh.transform.position).abs();
        d.x <= half.x && d.y <= half.y
    }

    /// Stop every tween of this item and hand back the mesh.
    pub fn destroy(&mut self, scheduler: &mut TweenScheduler) -> Option<PlaneMesh> {
        let stopped = scheduler.stop_owner(self.id);
        self.scale_motion = None;
        log::debug!("[item {}] destroyed, {} tweens stopped", self.id, stopped);
        self.mesh.detach()
    }
}
