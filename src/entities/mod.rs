//! Entity module - SeaORM entity definitions for the database.

pub mod inventory_item;

pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel,
};
