//! BuildObserver trait: receives each recorded step and narration line.

use crate::model::Step;

/// Observer injected into a single build.
///
/// All methods have no-op default implementations, so observers only need
/// to override what they care about.
pub trait BuildObserver {
    /// Called once per recorded step, in order.
    fn on_step(&self, _step: &Step) {}

    /// Human-readable narration of what the builder is doing.
    fn on_log(&self, _message: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}

impl<T: BuildObserver + ?Sized> BuildObserver for &T {
    fn on_step(&self, step: &Step) {
        (**self).on_step(step)
    }

    fn on_log(&self, message: &str) {
        (**self).on_log(message)
    }
}
