pub mod error;
pub mod explain;
pub mod logical_planner;
pub mod plan;
