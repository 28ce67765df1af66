//! Configuration for the ACC engine.
//! TOML-backed, every field optional with `effective_*()` defaults.

pub mod acc2_config;
pub mod acc_config;
pub mod build_config;

pub use acc2_config::Acc2Config;
pub use acc_config::AccConfig;
pub use build_config::BuildConfig;
