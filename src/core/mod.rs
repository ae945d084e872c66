//! Core business logic - framework-agnostic inventory operations.

/// Scannable code generation from item names
pub mod code;
/// Record store: persistence operations on the inventory table
pub mod inventory;
/// Item creation and delta-based stock updates
pub mod stock;
