// Cookie-based session authentication

pub mod middleware;
pub mod models;
pub mod service;
pub mod session;

pub use middleware::{cors_layer, session_gate};
pub use models::{AuthResponse, LoginRequest, MeResponse, MeUser, SessionUser, SignupRequest};
pub use service::AuthService;
pub use session::{removal_cookie, session_cookie, user_id_from_jar, SESSION_COOKIE};
