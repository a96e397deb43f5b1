use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use tower_http::cors::{Any, CorsLayer};

use crate::api::error::ApiError;
use crate::auth::session::user_id_from_jar;

/// Session gate applied to every non-public route. Requires the session
/// cookie to be present and parse as a numeric id; the id is not re-verified
/// against the database (a deleted user's stale cookie 404s on first use).
/// Handlers read the acting user from the query or path, so the gate only
/// checks the cookie.
pub async fn session_gate(
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    user_id_from_jar(&jar).ok_or(ApiError::Unauthorized)?;

    Ok(next.run(request).await)
}

/// Permissive CORS for the browser client.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
