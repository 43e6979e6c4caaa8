//! Per-scene registry of active tweens.
//!
//! Tweens are keyed by `(owner, property)` so at most one interpolation
//! targets a given property of a given item. Starting a tween on an occupied
//! key drops the previous one first. The driver calls [`TweenScheduler::advance`]
//! once per frame; owners then [`TweenScheduler::poll`] their keys and apply
//! the returned values themselves.

use crate::tween::{Channels, Tween, TweenPhase};
use fnv::FnvHashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Mesh scale; shared by `scale_to` and the enter animation.
    Scale,
    Follow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenKey {
    pub owner: ItemId,
    pub property: Property,
}

impl TweenKey {
    pub const fn new(owner: ItemId, property: Property) -> Self {
        Self { owner, property }
    }
}

#[derive(Clone, Debug)]
pub struct TweenSample {
    pub values: Channels,
    pub phase: TweenPhase,
    pub progress: f32,
}

#[derive(Debug, Default)]
pub struct TweenScheduler {
    active: FnvHashMap<TweenKey, Tween>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `key`, stopping whatever was running there.
    /// Returns true when a previous tween was replaced.
    pub fn start(&mut self, key: TweenKey, tween: Tween) -> bool {
        let replaced = self.active.remove(&key).is_some();
        if replaced {
            log::debug!("[tween] replacing {:?} on item {}", key.property, key.owner);
        }
        self.active.insert(key, tween);
        replaced
    }

    pub fn stop(&mut self, key: TweenKey) -> bool {
        self.active.remove(&key).is_some()
    }

    /// Stop every tween owned by `owner`; returns how many were removed.
    pub fn stop_owner(&mut self, owner: ItemId) -> usize {
        let before = self.active.len();
        self.active.retain(|k, _| k.owner != owner);
        before - self.active.len()
    }

    pub fn advance(&mut self, dt_ms: f32) {
        for tween in self.active.values_mut() {
            tween.advance(dt_ms);
        }
    }

    /// Current sample for `key`. A completed tween is removed as it is
    /// returned, so completion is observed exactly once.
    pub fn poll(&mut self, key: TweenKey) -> Option<TweenSample> {
        let sample = self.peek(key)?;
        if sample.phase == TweenPhase::Completed {
            self.active.remove(&key);
        }
        Some(sample)
    }

    pub fn peek(&self, key: TweenKey) -> Option<TweenSample> {
        self.active.get(&key).map(|t| TweenSample {
            values: t.values(),
            phase: t.phase(),
            progress: t.progress(),
        })
    }

    pub fn is_active(&self, key: TweenKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn active_for(&self, owner: ItemId) -> usize {
        self.active.keys().filter(|k| k.owner == owner).count()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
