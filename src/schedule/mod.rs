/// Manual-clock reference scheduler.
pub mod timeline;

use crate::animation::descriptor::AnimationDescriptor;

/// Platform animation driver.
///
/// A scheduler starts a looping animation for each descriptor it receives and hands back a
/// handle that owns it. Dropping the handle must stop the animation and release everything the
/// scheduler holds for it; the [`crate::Stage`] relies on this to cancel a scene on unmount.
pub trait AnimationScheduler {
    /// Owning token for one running animation.
    type Handle;

    /// Start `descriptor`. The animation runs until the returned handle is dropped.
    fn schedule(&self, descriptor: &AnimationDescriptor) -> Self::Handle;
}

impl<S: AnimationScheduler + ?Sized> AnimationScheduler for &S {
    type Handle = S::Handle;

    fn schedule(&self, descriptor: &AnimationDescriptor) -> Self::Handle {
        (**self).schedule(descriptor)
    }
}
