use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::{
    animation::descriptor::{AnimationDescriptor, DescriptorId},
    foundation::core::Affine,
    schedule::AnimationScheduler,
};

#[derive(Debug)]
struct Running {
    descriptor: AnimationDescriptor,
    started_at_s: f64,
}

#[derive(Debug, Default)]
struct TimelineState {
    now_s: f64,
    next_key: u64,
    active: BTreeMap<u64, Running>,
}

/// One running animation evaluated at the current time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampledAnimation {
    /// Descriptor being played.
    pub id: DescriptorId,
    /// Placement of the element: initial position, then the sampled pose.
    pub transform: Affine,
    /// Sampled opacity.
    pub opacity: f64,
}

/// Manual-clock scheduler.
///
/// Time only moves through [`Timeline::advance`], which makes playback fully reproducible.
/// Clones share the same clock and set of running animations.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    inner: Rc<RefCell<TimelineState>>,
}

/// Handle returned by [`Timeline::schedule`]. Dropping it stops the animation.
#[derive(Debug)]
pub struct TimelineHandle {
    key: u64,
    id: DescriptorId,
    state: Weak<RefCell<TimelineState>>,
}

impl TimelineHandle {
    /// Descriptor this handle plays.
    pub fn id(&self) -> DescriptorId {
        self.id
    }
}

impl Drop for TimelineHandle {
    fn drop(&mut self) {
        // The timeline may already be gone; nothing left to release then.
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().active.remove(&self.key);
        }
    }
}

impl Timeline {
    /// Empty timeline at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `dt_s` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&self, dt_s: f64) {
        if !dt_s.is_finite() || dt_s < 0.0 {
            tracing::debug!(dt_s, "ignoring invalid timeline step");
            return;
        }
        self.inner.borrow_mut().now_s += dt_s;
    }

    /// Current clock value in seconds.
    pub fn now(&self) -> f64 {
        self.inner.borrow().now_s
    }

    /// Number of animations currently running.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Evaluate every running animation at the current time, in scheduling order.
    pub fn sample(&self) -> Vec<SampledAnimation> {
        let state = self.inner.borrow();
        state
            .active
            .values()
            .map(|r| {
                let pose = r.descriptor.pose_at(state.now_s - r.started_at_s);
                SampledAnimation {
                    id: r.descriptor.id,
                    transform: pose.to_affine(r.descriptor.initial_position),
                    opacity: pose.opacity,
                }
            })
            .collect()
    }
}

impl AnimationScheduler for Timeline {
    type Handle = TimelineHandle;

    fn schedule(&self, descriptor: &AnimationDescriptor) -> TimelineHandle {
        let mut state = self.inner.borrow_mut();
        let key = state.next_key;
        state.next_key += 1;
        let started_at_s = state.now_s;
        state.active.insert(
            key,
            Running {
                descriptor: descriptor.clone(),
                started_at_s,
            },
        );
        TimelineHandle {
            key,
            id: descriptor.id,
            state: Rc::downgrade(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timeline.rs"]
mod tests;
