use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::auth::{
    removal_cookie, session_cookie, user_id_from_jar, AuthResponse, AuthService, LoginRequest,
    MeResponse, SignupRequest,
};

/// Authentication routes. All public: signup/login create the session,
/// logout clears it, and /me reports a null user without one.
pub fn auth_routes(auth_service: AuthService) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(auth_service)
}

#[tracing::instrument(skip(auth_service, jar, request))]
async fn signup(
    State(auth_service): State<AuthService>,
    jar: CookieJar,
    Json(request): Json<SignupRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let user = auth_service.signup(request).await?;
    let jar = jar.add(session_cookie(user.id));

    Ok((jar, Json(AuthResponse { success: true, user })))
}

#[tracing::instrument(skip(auth_service, jar, request))]
async fn login(
    State(auth_service): State<AuthService>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    let user = auth_service.login(request).await?;
    let jar = jar.add(session_cookie(user.id));

    Ok((jar, Json(AuthResponse { success: true, user })))
}

async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    (jar.add(removal_cookie()), Json(json!({ "success": true })))
}

#[tracing::instrument(skip(auth_service, jar))]
async fn me(
    State(auth_service): State<AuthService>,
    jar: CookieJar,
) -> Result<Json<MeResponse>, ApiError> {
    let user = match user_id_from_jar(&jar) {
        Some(user_id) => auth_service.current_user(user_id).await?,
        None => None,
    };

    Ok(Json(MeResponse { user }))
}
