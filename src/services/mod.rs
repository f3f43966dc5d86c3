//! Configuration loading, involvement aggregation and the per-run pipeline

pub mod config;
pub mod involvement;
pub mod report;

pub use config::*;
pub use involvement::*;
pub use report::*;
