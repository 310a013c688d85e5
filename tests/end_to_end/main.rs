//! End-to-end tests through the `quarry` facade
//!
//! Each module drives a full workflow: configure, index, query, mutate.

mod common;
mod config_workflow;
mod executor_workflow;
mod shared_engine;
