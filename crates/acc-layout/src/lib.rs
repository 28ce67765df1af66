//! # acc-layout
//!
//! The ACC engine: greedy pair/cluster selection, linkage aggregation,
//! concentric-circle placement, the iterative builder and the ACC2
//! transform. Pure, single-threaded computation over in-memory matrices.

pub mod acc2;
pub mod builder;
pub mod linkage;
pub mod pair_finder;
pub mod placer;
pub mod similarity;

pub use acc2::Acc2Transformer;
pub use builder::{AccBuild, AccBuilder};
pub use pair_finder::{Candidate, CandidateKind, PairFinder};
pub use similarity::SimilarityAccessor;
