use actix_web::{patch, web};
use tracing::info;

use crate::db::item_store::ItemStore;
use crate::types::error::AppError;
use crate::types::item::{ItemRes, UpdateItem};
use crate::types::response::{ApiResponse, ApiResult};

/// An absent body is an empty patch, so a PATCH on an unknown name still
/// reports 404 rather than a body error.
fn parse_patch(body: &[u8]) -> Result<UpdateItem, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateItem::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

#[patch("/{name}")]
async fn update_item(
    store: web::Data<ItemStore>,
    name: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<ItemRes> {
    let patch = parse_patch(&body)?;
    let item = store.update(&name, patch)?;
    info!("Updated item {} -> {}", name, item.name);

    Ok(ApiResponse::Ok(ItemRes { item }))
}
