use sha2::{Digest, Sha256};

/// Salt prefixed to the password digest when deriving the session token.
const SESSION_TOKEN_SALT: &str = "div-crm-secret-";

/// File extensions served without a session (login page assets).
const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".woff", ".woff2", ".ttf",
];

/// Outcome of the gate policy for one inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through.
    Allow,
    /// API request without a valid session.
    Unauthorized,
    /// Page request without a valid session.
    RedirectToLogin,
}

/// Credential and session gate.
///
/// Holds the SHA-256 digest of the configured password and the static
/// session token derived from it. Both are computed once at startup and
/// immutable for the process lifetime; every successful login is issued
/// the same token, and a presented cookie is valid iff it matches that
/// token exactly.
#[derive(Clone)]
pub struct AuthGate {
    password_hash: String,
    session_token: String,
}

impl AuthGate {
    /// Build the gate from the configured password.
    ///
    /// `session_secret` overrides the derived token (SESSION_SECRET in
    /// production deployments).
    pub fn new(password: &str, session_secret: Option<String>) -> Self {
        let password_hash = sha256_hex(password);
        let session_token = session_secret
            .unwrap_or_else(|| sha256_hex(&format!("{SESSION_TOKEN_SALT}{password_hash}")));

        Self {
            password_hash,
            session_token,
        }
    }

    /// Check a login attempt against the configured password.
    ///
    /// Exact match only: case-sensitive, no trimming. Digests are compared
    /// with plain string equality (see DESIGN.md on constant-time
    /// comparison).
    pub fn verify_password(&self, candidate: &str) -> bool {
        sha256_hex(candidate) == self.password_hash
    }

    /// The process-wide token issued to every successful login.
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    /// True iff the presented cookie value matches the session token.
    pub fn is_authenticated(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|token| token == self.session_token)
    }

    /// Gate policy for one request.
    ///
    /// Public paths always pass. Everything else needs a valid session;
    /// API paths get an unauthorized answer, page paths a redirect to the
    /// login page.
    pub fn decide(&self, path: &str, presented: Option<&str>) -> GateDecision {
        if is_public_path(path) || self.is_authenticated(presented) {
            return GateDecision::Allow;
        }

        if path.starts_with("/api/") {
            GateDecision::Unauthorized
        } else {
            GateDecision::RedirectToLogin
        }
    }
}

/// Paths reachable without a session: the login page, static assets and
/// the auth endpoints themselves.
fn is_public_path(path: &str) -> bool {
    path == "/login.html"
        || path.starts_with("/api/auth/")
        || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_password_exact_match_only() {
        let gate = AuthGate::new("s3cret", None);

        assert!(gate.verify_password("s3cret"));
        assert!(!gate.verify_password("S3cret"));
        assert!(!gate.verify_password(" s3cret"));
        assert!(!gate.verify_password("s3cret "));
        assert!(!gate.verify_password(""));
    }

    #[test]
    fn session_token_is_stable_for_a_credential() {
        let gate = AuthGate::new("s3cret", None);
        let other = AuthGate::new("s3cret", None);

        // Two logins, same process-wide token
        assert_eq!(gate.session_token(), other.session_token());
    }

    #[test]
    fn different_passwords_derive_different_tokens() {
        let gate = AuthGate::new("s3cret", None);
        let other = AuthGate::new("autre", None);

        assert_ne!(gate.session_token(), other.session_token());
    }

    #[test]
    fn session_secret_override_replaces_the_derived_token() {
        let gate = AuthGate::new("s3cret", Some("fixed-token".to_string()));

        assert_eq!(gate.session_token(), "fixed-token");
        assert!(gate.is_authenticated(Some("fixed-token")));
    }

    #[test]
    fn is_authenticated_truth_table() {
        let gate = AuthGate::new("s3cret", None);
        let token = gate.session_token().to_string();

        assert!(gate.is_authenticated(Some(&token)));
        assert!(!gate.is_authenticated(Some("forged")));
        assert!(!gate.is_authenticated(Some("")));
        assert!(!gate.is_authenticated(None));
    }

    #[test]
    fn public_paths_pass_without_a_session() {
        let gate = AuthGate::new("s3cret", None);

        for path in [
            "/login.html",
            "/styles/app.css",
            "/js/app.js",
            "/img/logo.png",
            "/fonts/inter.woff2",
            "/favicon.ico",
            "/api/auth/login",
            "/api/auth/check",
            "/api/auth/logout",
        ] {
            assert_eq!(gate.decide(path, None), GateDecision::Allow, "{path}");
        }
    }

    #[test]
    fn api_paths_without_a_session_are_unauthorized() {
        let gate = AuthGate::new("s3cret", None);

        assert_eq!(gate.decide("/api/prospects", None), GateDecision::Unauthorized);
        assert_eq!(
            gate.decide("/api/stats", Some("forged")),
            GateDecision::Unauthorized
        );
    }

    #[test]
    fn page_paths_without_a_session_redirect_to_login() {
        let gate = AuthGate::new("s3cret", None);

        assert_eq!(gate.decide("/", None), GateDecision::RedirectToLogin);
        assert_eq!(
            gate.decide("/index.html", None),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn a_valid_session_allows_everything() {
        let gate = AuthGate::new("s3cret", None);
        let token = gate.session_token().to_string();

        assert_eq!(gate.decide("/api/prospects", Some(&token)), GateDecision::Allow);
        assert_eq!(gate.decide("/", Some(&token)), GateDecision::Allow);
    }
}
