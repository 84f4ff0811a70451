use crate::types::error::AppError;
use crate::types::response::ApiResult;

/// Catch-all for anything no route claimed, including a known path with the
/// wrong method.
pub async fn not_found(req: actix_web::HttpRequest) -> ApiResult<()> {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    Err(AppError::RouteNotFound)
}
