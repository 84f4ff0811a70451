use actix_web::{
    dev::ServiceResponse,
    error::JsonPayloadError,
    http::header,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web, HttpRequest, ResponseError,
};

use crate::types::error::AppError;

pub mod fallback;
pub mod health;
pub mod item;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid JSON body: {err}")).into()
}

/// Rewrites error responses that didn't come out of `AppError` (payload
/// limits, extractor failures, handlers answering with a bare status) into
/// the `{"error": ...}` shape.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_error)
}

fn render_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map_or(false, |ct| ct.as_bytes().starts_with(b"application/json"));

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let message = res
        .response()
        .error()
        .map(|e| e.to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown Error").to_string());
    tracing::debug!("Rewriting {} response: {}", status, message);

    let (req, _) = res.into_parts();
    let body = AppError::from_status(status, message).error_response();

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, body).map_into_right_body(),
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/items")
            .service(item::list::list_items)
            .service(item::create::create_item)
            .service(item::get::get_item)
            .service(item::update::update_item)
            .service(item::delete::delete_item)
    );
}
