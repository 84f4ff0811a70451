use actix_web::{delete, web};
use tracing::info;

use crate::db::item_store::ItemStore;
use crate::types::item::MessageRes;
use crate::types::response::{ApiResponse, ApiResult};

#[delete("/{name}")]
async fn delete_item(
    store: web::Data<ItemStore>,
    name: web::Path<String>,
) -> ApiResult<MessageRes> {
    store.remove(&name)?;
    info!("Deleted item {}", name);

    Ok(ApiResponse::Ok(MessageRes {
        message: "Deleted".to_string(),
    }))
}
