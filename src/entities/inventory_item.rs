//! Inventory item entity - One tracked stock record.
//!
//! Each item has a name, a non-negative quantity, a unit price and an optional
//! scannable code rendered from its name. Timestamps are maintained by the store layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display label, also the input to code generation
    pub name: String,
    /// Units in stock, never negative
    pub quantity: i64,
    /// Unit price
    pub price: f64,
    /// QR code data URL, `None` when generation was unavailable
    pub code: Option<String>,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified
    pub updated_at: DateTimeUtc,
}

/// `InventoryItem` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
