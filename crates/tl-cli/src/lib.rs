//! CLI library components for the residence timeline tool.

pub mod logging;
pub mod pipeline;
