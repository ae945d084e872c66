//! Stock business logic - Creating items and applying delta updates.
//!
//! Updates never overwrite the quantity: the request carries a signed delta that is
//! added to the stored count, and any change that would leave the count below zero is
//! rejected without writing anything. The scannable code is regenerated only when an
//! update actually changes the item's name.

use crate::{
    core::{
        code::CodeGenerator,
        inventory::{self, ItemChanges, NewItem},
    },
    entities::inventory_item,
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

/// A partial update to an item.
///
/// `name` and `price` replace the stored values when present; `quantity_delta`
/// is added to the stored quantity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemUpdate {
    /// New name; regenerates the code when it differs from the current one
    pub name: Option<String>,
    /// Signed change added to the stored quantity
    pub quantity_delta: i64,
    /// New unit price
    pub price: Option<f64>,
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("Item name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::invalid_input(format!(
            "Invalid price {price}: must be a non-negative number"
        )));
    }
    Ok(())
}

/// Creates a new item and renders its code from the trimmed name.
///
/// A failed code render leaves the item without a code; it does not fail the create.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The quantity is negative
/// - The price is negative or not finite (NaN, infinity)
/// - The database insert fails
#[instrument(skip(db, codes))]
pub async fn add_item(
    db: &DatabaseConnection,
    codes: &dyn CodeGenerator,
    name: String,
    quantity: i64,
    price: f64,
) -> Result<inventory_item::Model> {
    let name = validate_name(&name)?;
    if quantity < 0 {
        return Err(Error::invalid_input(format!(
            "Invalid quantity {quantity}: must not be negative"
        )));
    }
    validate_price(price)?;

    let code = codes.generate(&name).into_payload();
    let item = inventory::create_item(
        db,
        NewItem {
            name,
            quantity,
            price,
            code,
        },
    )
    .await?;

    info!("Added item {} ({}) with quantity {}", item.id, item.name, item.quantity);
    Ok(item)
}

/// Works out why a guarded update matched no row after the pre-read passed:
/// another writer either drained the stock or deleted the item in between.
async fn explain_missed_update<C>(db: &C, item_id: i64, delta: i64) -> Result<Error>
where
    C: ConnectionTrait,
{
    Ok(match inventory::get_item_by_id(db, item_id).await? {
        Some(item) => Error::InsufficientStock {
            available: item.quantity,
            requested: delta.saturating_neg(),
        },
        None => Error::ItemNotFound { id: item_id },
    })
}

/// Applies a partial update to an item.
///
/// The current item is read inside a transaction to learn its name and quantity, the
/// code is regenerated only if the name changes, and the write is a single conditional
/// increment so a concurrent update cannot be lost.
///
/// # Errors
/// Returns an error if:
/// - A supplied name is blank or a supplied price is negative or not finite
/// - The item does not exist (`ItemNotFound`)
/// - The delta would make the quantity negative (`InsufficientStock`); nothing is written
/// - The database operation fails
#[instrument(skip(db, codes))]
pub async fn apply_update(
    db: &DatabaseConnection,
    codes: &dyn CodeGenerator,
    item_id: i64,
    update: ItemUpdate,
) -> Result<inventory_item::Model> {
    let name = update.name.as_deref().map(validate_name).transpose()?;
    if let Some(price) = update.price {
        validate_price(price)?;
    }
    let delta = update.quantity_delta;

    let txn = db.begin().await?;

    let current = inventory::get_item_by_id(&txn, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let new_quantity = current
        .quantity
        .checked_add(delta)
        .ok_or_else(|| Error::invalid_input(format!("Quantity change {delta} is out of range")))?;
    if new_quantity < 0 {
        return Err(Error::InsufficientStock {
            available: current.quantity,
            requested: delta.saturating_neg(),
        });
    }

    let rename = name.filter(|name| *name != current.name);
    let code = rename
        .as_deref()
        .map(|name| codes.generate(name).into_payload());

    let changes = ItemChanges {
        quantity_delta: delta,
        name: rename,
        price: update.price,
        code,
    };

    let Some(updated) = inventory::update_item(&txn, item_id, &changes).await? else {
        return Err(explain_missed_update(&txn, item_id, delta).await?);
    };

    txn.commit().await?;

    info!(
        "Updated item {}: quantity {} -> {}",
        item_id, current.quantity, updated.quantity
    );
    Ok(updated)
}
