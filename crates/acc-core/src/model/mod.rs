//! Model types shared by the builder and the ACC2 transform.

pub mod acc2;
pub mod cluster;
pub mod linkage_method;
pub mod matrix;
pub mod point;
pub mod step;
pub mod structure;

pub use acc2::{
    Acc2Bundle, Acc2Options, AreaPosition, ConnectionLine, MergeLevel, MergePoint, NodeRef,
};
pub use cluster::Cluster;
pub use linkage_method::LinkageMethod;
pub use matrix::SimilarityMatrix;
pub use point::{Point, Polar};
pub use step::{Step, StepAction};
pub use structure::StructureNode;

/// Atomic area identifier; a leaf of the hierarchy.
pub type Area = String;
