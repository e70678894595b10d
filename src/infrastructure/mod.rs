//! Infrastructure layer: store backends and process-level plumbing

pub mod logging;
pub mod store;
