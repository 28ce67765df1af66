//! Build observation.
//! Trait with no-op defaults, passed by reference for one build.

pub mod handler;

pub use handler::{BuildObserver, NoopObserver};
