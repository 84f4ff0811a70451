use actix_web::{get, web};

use crate::db::item_store::ItemStore;
use crate::types::item::ItemListRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list_items(
    _req: actix_web::HttpRequest,
    store: web::Data<ItemStore>,
) -> ApiResult<ItemListRes> {
    Ok(ApiResponse::Ok(ItemListRes {
        items: store.list(),
    }))
}
