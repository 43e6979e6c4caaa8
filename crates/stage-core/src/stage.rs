//! Scene driver: owns the tween scheduler and the tracked items of one page.
//!
//! Per frame the scheduler is advanced first, then items tick in insertion
//! order, so every item reads tween values for the current frame.

use crate::bounds::BoundsSource;
use crate::config::TrackingConfig;
use crate::error::StageError;
use crate::frame::FrameInfo;
use crate::geometry::Viewport;
use crate::item::{FollowDescriptor, TrackedItem};
use crate::mesh::PlaneMesh;
use crate::scheduler::{ItemId, TweenScheduler};
use glam::Vec2;

pub struct Stage<S: BoundsSource> {
    config: TrackingConfig,
    viewport: Viewport,
    scheduler: TweenScheduler,
    items: Vec<TrackedItem<S>>,
    next_id: u32,
    seed: u64,
}

impl<S: BoundsSource> Stage<S> {
    pub fn new(config: TrackingConfig, viewport: Viewport, seed: u64) -> Result<Self, StageError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport,
            scheduler: TweenScheduler::new(),
            items: Vec::new(),
            next_id: 0,
            seed,
        })
    }

    /// Track a new element. Its ordinal key is its insertion position,
    /// starting at 1.
    pub fn push(&mut self, source: S) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        // derive per-item RNGs from the stage seed so scenes are reproducible
        let seed = self.seed ^ (id.0 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let descriptor = FollowDescriptor::new(id.0 + 1, self.config.clone());
        self.items
            .push(TrackedItem::new(id, source, descriptor, self.viewport, seed));
        id
    }

    pub fn item(&self, id: ItemId) -> Result<&TrackedItem<S>, StageError> {
        self.items
            .iter()
            .find(|i| i.id() == id)
            .ok_or(StageError::UnknownItem(id))
    }

    pub fn item_mut(&mut self, id: ItemId) -> Result<&mut TrackedItem<S>, StageError> {
        self.items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(StageError::UnknownItem(id))
    }

    pub fn items(&self) -> &[TrackedItem<S>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scheduler(&self) -> &TweenScheduler {
        &self.scheduler
    }

    pub fn attach_mesh(
        &mut self,
        id: ItemId,
        mesh: PlaneMesh,
    ) -> Result<Option<PlaneMesh>, StageError> {
        Ok(self.item_mut(id)?.attach_mesh(mesh))
    }

    pub fn meshes(&self) -> impl Iterator<Item = &PlaneMesh> {
        self.items.iter().filter_map(|i| i.mesh())
    }

    pub fn frame(&mut self, frame: &FrameInfo) {
        self.scheduler.advance(frame.delta_ms);
        for item in &mut self.items {
            item.tick(&mut self.scheduler, frame);
        }
    }

    /// Forward a viewport-space pointer position to every item.
    pub fn set_pointer(&mut self, p: Vec2) {
        for item in &mut self.items {
            item.set_target_pointer(p);
        }
    }

    pub fn set_following(&mut self, enabled: bool) {
        log::debug!("[stage] following={} for {} items", enabled, self.items.len());
        for item in &mut self.items {
            item.set_following(&mut self.scheduler, enabled);
        }
    }

    pub fn set_item_following(&mut self, id: ItemId, enabled: bool) -> Result<(), StageError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(StageError::UnknownItem(id))?;
        item.set_following(&mut self.scheduler, enabled);
        Ok(())
    }

    pub fn animate_enter_all(&mut self) {
        for item in &mut self.items {
            item.animate_enter(&mut self.scheduler);
        }
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for item in &mut self.items {
            item.on_resize(viewport);
        }
    }

    /// Topmost (last inserted) item under a viewport-space point.
    pub fn pick(&self, p: Vec2) -> Option<ItemId> {
        let centered = self.viewport.dom_to_centered(p);
        self.items
            .iter()
            .rev()
            .find(|i| i.contains(centered))
            .map(|i| i.id())
    }

    /// Stop the item's tweens and stop tracking it. Keys of the remaining
    /// items are left unchanged.
    pub fn remove(&mut self, id: ItemId) -> Result<TrackedItem<S>, StageError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(StageError::UnknownItem(id))?;
        let mut item = self.items.remove(idx);
        item.destroy(&mut self.scheduler);
        Ok(item)
    }

    pub fn destroy(&mut self) {
        for item in &mut self.items {
            item.destroy(&mut self.scheduler);
        }
        self.items.clear();
        self.scheduler.clear();
    }
}
