//! Inventory endpoints - list, show, create, delta update and delete.

use crate::{
    api::{ApiState, error::MessageBody},
    core::{
        inventory,
        stock::{self, ItemUpdate},
    },
    entities::inventory_item,
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::{debug, info};

/// Body of `POST /inventory`
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Display name, also rendered into the item's code
    pub name: String,
    /// Initial units in stock
    pub quantity: i64,
    /// Unit price
    pub price: f64,
}

/// Body of `PUT /inventory/{id}`; `quantity` is a signed delta, not the new total
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    /// Replacement name, omitted to keep the current one
    pub name: Option<String>,
    /// Units to add (positive) or remove (negative); absent or `null` means no change
    pub quantity: Option<i64>,
    /// Replacement unit price
    pub price: Option<f64>,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        Self {
            name: request.name,
            quantity_delta: request.quantity.unwrap_or(0),
            price: request.price,
        }
    }
}

fn parse_item_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| Error::MalformedId {
        id: raw.to_string(),
    })
}

/// Lists every item.
pub async fn list_inventory(
    State(state): State<ApiState>,
) -> Result<Json<Vec<inventory_item::Model>>> {
    let items = inventory::list_items(&state.database).await?;
    Ok(Json(items))
}

/// Returns one item, or 404 when it does not exist.
pub async fn show_item(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<Json<inventory_item::Model>> {
    let item_id = parse_item_id(&raw_id)?;
    inventory::get_item_by_id(&state.database, item_id)
        .await?
        .map(Json)
        .ok_or(Error::ItemNotFound { id: item_id })
}

/// Creates an item and renders its code; responds with 201.
pub async fn create_item(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<inventory_item::Model>)> {
    let Json(request) = payload?;
    let item = stock::add_item(
        &state.database,
        state.codes.as_ref(),
        request.name,
        request.quantity,
        request.price,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Applies a delta update; 400 when the quantity would go negative.
pub async fn update_item(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<inventory_item::Model>> {
    let item_id = parse_item_id(&raw_id)?;
    let Json(request) = payload?;
    info!("Received update request for item {}", item_id);
    debug!("Update data: {:?}", request);

    let item = stock::apply_update(
        &state.database,
        state.codes.as_ref(),
        item_id,
        request.into(),
    )
    .await?;
    Ok(Json(item))
}

/// Permanently deletes an item.
pub async fn delete_item(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageBody>> {
    let item_id = parse_item_id(&raw_id)?;
    if !inventory::delete_item(&state.database, item_id).await? {
        return Err(Error::ItemNotFound { id: item_id });
    }
    info!("Deleted item {}", item_id);
    Ok(Json(MessageBody::new("Item deleted successfully")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_item_id() {
        assert!(matches!(parse_item_id("17"), Ok(17)));
        assert!(matches!(
            parse_item_id("65f0c0ffee"),
            Err(Error::MalformedId { id: _ })
        ));
    }

    #[test]
    fn test_update_request_defaults_to_zero_delta() {
        let request: UpdateItemRequest =
            serde_json::from_str(r#"{"name":"Gadget"}"#).unwrap();
        let update = ItemUpdate::from(request);
        assert_eq!(update.quantity_delta, 0);
        assert_eq!(update.name.as_deref(), Some("Gadget"));
        assert_eq!(update.price, None);
    }

    #[test]
    fn test_update_request_null_quantity_is_zero_delta() {
        let request: UpdateItemRequest =
            serde_json::from_str(r#"{"quantity":null,"price":2.5}"#).unwrap();
        let update = ItemUpdate::from(request);
        assert_eq!(update.quantity_delta, 0);
        assert_eq!(update.price, Some(2.5));
    }
}
