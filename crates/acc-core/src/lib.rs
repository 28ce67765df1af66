//! # acc-core
//!
//! Foundation crate for the ACC (area cladogram on concentric circles) engine.
//! Defines the model types, errors, config, observer trait, polar geometry,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod model;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::AccConfig;
pub use errors::{Acc2Error, AccError, BuildError, ConfigError};
pub use events::{BuildObserver, NoopObserver};
pub use model::{
    Acc2Bundle, Acc2Options, Area, AreaPosition, Cluster, ConnectionLine, LinkageMethod,
    MergeLevel, MergePoint, NodeRef, Point, Polar, SimilarityMatrix, Step, StepAction,
    StructureNode,
};
