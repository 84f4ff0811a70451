use actix_web::{post, web};
use tracing::info;

use crate::db::item_store::ItemStore;
use crate::types::error::AppError;
use crate::types::item::{CreateItem, ItemRes};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create_item(
    store: web::Data<ItemStore>,
    data: web::Json<CreateItem>,
) -> ApiResult<ItemRes> {
    let item = data.into_inner().into_item().map_err(|missing| {
        AppError::BadRequest(format!("Missing required field(s): {}", missing.join(", ")))
    })?;

    let item = store.create(item);
    info!("Created item {}", item.name);

    Ok(ApiResponse::Created(ItemRes { item }))
}
