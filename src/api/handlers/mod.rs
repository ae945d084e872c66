//! HTTP handlers organized by resource.

/// Liveness endpoint
pub mod general;

/// `/inventory` CRUD and delta updates
pub mod inventory;

pub use general::*;
pub use inventory::*;
