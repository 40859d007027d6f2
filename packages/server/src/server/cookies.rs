use axum::http::{header, HeaderMap};

/// Session cookie name used for authentication.
///
/// Must be consistent across login, logout and the gate middleware.
pub const SESSION_COOKIE_NAME: &str = "divcrm_auth";

/// Session cookie maximum age in seconds (30 days).
///
/// The token itself never expires server-side; the cookie lifetime is the
/// only expiry the client sees.
pub const SESSION_COOKIE_MAX_AGE: i64 = 30 * 24 * 60 * 60;

/// Pull a named cookie value out of the request headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value carrying the session token.
///
/// HttpOnly and SameSite=Lax always; Secure only under a production-like
/// environment.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_COOKIE_MAX_AGE}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value overwriting the session cookie with an expired
/// empty value.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_the_named_cookie_among_several() {
        let headers = headers_with_cookie("theme=dark; divcrm_auth=tok123; lang=fr");

        assert_eq!(
            extract_cookie(&headers, SESSION_COOKIE_NAME).as_deref(),
            Some("tok123")
        );
    }

    #[test]
    fn missing_cookie_yields_none() {
        let headers = headers_with_cookie("theme=dark");

        assert_eq!(extract_cookie(&headers, SESSION_COOKIE_NAME), None);
        assert_eq!(extract_cookie(&HeaderMap::new(), SESSION_COOKIE_NAME), None);
    }

    #[test]
    fn cookie_name_matching_is_exact() {
        let headers = headers_with_cookie("divcrm_auth_old=stale; divcrm_auth=fresh");

        assert_eq!(
            extract_cookie(&headers, SESSION_COOKIE_NAME).as_deref(),
            Some("fresh")
        );
    }

    #[test]
    fn session_cookie_carries_the_expected_attributes() {
        let cookie = session_cookie("tok123", false);

        assert!(cookie.starts_with("divcrm_auth=tok123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=2592000"));
        assert!(!cookie.contains("Secure"));

        assert!(session_cookie("tok123", true).contains("Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();

        assert!(cookie.starts_with("divcrm_auth=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
