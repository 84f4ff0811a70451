use actix_web::{get, web};

use crate::db::item_store::ItemStore;
use crate::types::item::ItemRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{name}")]
async fn get_item(
    store: web::Data<ItemStore>,
    name: web::Path<String>,
) -> ApiResult<ItemRes> {
    let item = store.find_by_name(&name)?;

    Ok(ApiResponse::Ok(ItemRes { item }))
}
