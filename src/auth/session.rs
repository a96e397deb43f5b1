use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the HTTP-only session cookie. Holds the numeric user id.
pub const SESSION_COOKIE: &str = "user_id";

const SESSION_TTL_DAYS: i64 = 7;

/// Build the session cookie set on login and signup.
pub fn session_cookie(user_id: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Expired cookie sent on logout to clear the session.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Read and parse the session cookie from a jar. Returns None when the
/// cookie is absent or not a valid integer id.
pub fn user_id_from_jar(jar: &CookieJar) -> Option<i64> {
    jar.get(SESSION_COOKIE)?.value().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_with_week_expiry() {
        let cookie = session_cookie(42);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "42");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn jar_parsing_rejects_non_numeric_ids() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "17"));
        assert_eq!(user_id_from_jar(&jar), Some(17));

        let bad = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-number"));
        assert_eq!(user_id_from_jar(&bad), None);

        assert_eq!(user_id_from_jar(&CookieJar::new()), None);
    }
}
