use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::achievements::{achievements_routes, user_achievements_routes};
use super::auth::auth_routes;
use super::dashboard::dashboard_routes;
use super::goals::{goals_routes, user_goals_routes};
use super::health::health_check;
use super::trainers::{connections_routes, trainers_routes};
use super::users::{athletes_routes, users_routes};
use super::workouts::{exercise_types_routes, workouts_routes};
use crate::auth::{cors_layer, session_gate, AuthService};

/// Build the application router. /health and /api/auth/* are public;
/// everything else sits behind the session gate.
pub fn create_routes(db: PgPool) -> Router {
    let auth_service = AuthService::new(db.clone());

    let protected = Router::new()
        .nest("/api/users", users_routes(db.clone()))
        .nest("/api/athletes", athletes_routes(db.clone()))
        .nest("/api/trainers", trainers_routes(db.clone()))
        .nest("/api/trainer-connections", connections_routes(db.clone()))
        .nest("/api/workouts", workouts_routes(db.clone()))
        .nest("/api/exercise-types", exercise_types_routes(db.clone()))
        .nest("/api/goals", goals_routes(db.clone()))
        .nest("/api/user-goals", user_goals_routes(db.clone()))
        .nest("/api/achievements", achievements_routes(db.clone()))
        .nest(
            "/api/user-achievements",
            user_achievements_routes(db.clone()),
        )
        .nest("/api/dashboard", dashboard_routes(db))
        .route_layer(middleware::from_fn(session_gate));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes(auth_service))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
