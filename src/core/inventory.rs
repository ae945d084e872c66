//! Inventory record store - Persistence operations for inventory items.
//!
//! These functions are the only place that talks to the `inventory` table. They are
//! generic over [`ConnectionTrait`] so the mutation service can run them inside a
//! database transaction, and tests can hand them an in-memory database.

use crate::{
    entities::{InventoryItem, inventory_item},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use tracing::{debug, instrument};

/// Fields needed to insert a new item.
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    /// Display name
    pub name: String,
    /// Initial units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
    /// Rendered code, if one was generated
    pub code: Option<String>,
}

/// Changes applied by [`update_item`] in one statement.
///
/// `quantity_delta` is always added to the stored quantity. The remaining fields
/// replace the stored values only when they are `Some`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemChanges {
    /// Signed amount added to the stored quantity
    pub quantity_delta: i64,
    /// Replacement name
    pub name: Option<String>,
    /// Replacement unit price
    pub price: Option<f64>,
    /// `Some(None)` clears the stored code
    pub code: Option<Option<String>>,
}

/// Retrieves every item, ordered by identifier.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_items<C>(db: &C) -> Result<Vec<inventory_item::Model>>
where
    C: ConnectionTrait,
{
    InventoryItem::find()
        .order_by_asc(inventory_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific item by its unique ID, returning None if it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_item_by_id<C>(db: &C, item_id: i64) -> Result<Option<inventory_item::Model>>
where
    C: ConnectionTrait,
{
    InventoryItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new item, assigning its identifier and both timestamps.
///
/// No validation happens here; see `core::stock::add_item`.
///
/// # Errors
/// Returns an error if the database insert fails.
#[instrument(skip(db, item), fields(name = %item.name))]
pub async fn create_item<C>(db: &C, item: NewItem) -> Result<inventory_item::Model>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now();

    let model = inventory_item::ActiveModel {
        name: Set(item.name),
        quantity: Set(item.quantity),
        price: Set(item.price),
        code: Set(item.code),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = model.insert(db).await?;
    debug!("Created inventory item {}", created.id);
    Ok(created)
}

/// Applies `changes` to an item with a single conditional `UPDATE`.
///
/// The quantity is incremented in place (`quantity = quantity + delta`) and the row
/// only matches while `quantity + delta >= 0`, so concurrent deltas on the same item
/// never lose an update and never drive the quantity negative.
///
/// Returns `None` when no row matched: either the item does not exist or the delta
/// would have made its quantity negative.
///
/// # Errors
/// Returns an error if the database update fails.
#[instrument(skip(db))]
pub async fn update_item<C>(
    db: &C,
    item_id: i64,
    changes: &ItemChanges,
) -> Result<Option<inventory_item::Model>>
where
    C: ConnectionTrait,
{
    let mut update = InventoryItem::update_many()
        .col_expr(
            inventory_item::Column::Quantity,
            Expr::col(inventory_item::Column::Quantity).add(changes.quantity_delta),
        )
        .col_expr(
            inventory_item::Column::UpdatedAt,
            Expr::value(chrono::Utc::now()),
        )
        .filter(inventory_item::Column::Id.eq(item_id))
        .filter(inventory_item::Column::Quantity.gte(changes.quantity_delta.saturating_neg()));

    if let Some(name) = &changes.name {
        update = update.col_expr(inventory_item::Column::Name, Expr::value(name.clone()));
    }
    if let Some(price) = changes.price {
        update = update.col_expr(inventory_item::Column::Price, Expr::value(price));
    }
    if let Some(code) = &changes.code {
        update = update.col_expr(inventory_item::Column::Code, Expr::value(code.clone()));
    }

    let result = update.exec(db).await?;
    if result.rows_affected == 0 {
        return Ok(None);
    }

    get_item_by_id(db, item_id).await
}

/// Permanently deletes an item. Returns `false` if there was nothing to delete.
///
/// # Errors
/// Returns an error if the database delete fails.
#[instrument(skip(db))]
pub async fn delete_item<C>(db: &C, item_id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    let result = InventoryItem::delete_by_id(item_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
