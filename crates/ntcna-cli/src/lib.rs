//! CLI library components for the NTCNA dashboard.

pub mod filter_args;
pub mod logging;
pub mod summary;
