/**
 * Route Guard
 * 
 * Pure request-interception policy: given a request path and an optional
 * session token, decide whether to allow the request or redirect to the
 * login page. The decision function has no framework types in its
 * signature, so it unit-tests without spinning up a server; the Axum
 * adapter lives in `backend::middleware::auth`.
 * 
 * # Matching
 * 
 * Protected prefixes are configured at startup and immutable thereafter.
 * Matching is prefix-based with a path-segment boundary ("/admin" protects
 * "/admin" and "/admin/..." but not "/administrator"), evaluated
 * first-match-wins across the configured list.
 */

use crate::backend::auth::sessions::Sessions;

/// Path the guard redirects unauthenticated requests to
pub const LOGIN_PATH: &str = "/login";

/// The per-request decision of the route guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Let the request through
    Allow,
    /// Redirect to the login page; the string is the full redirect target
    /// including the `callbackUrl` query parameter
    Redirect(String),
}

/// Ordered set of protected path prefixes
#[derive(Debug, Clone)]
pub struct ProtectedPaths {
    prefixes: Vec<String>,
}

impl ProtectedPaths {
    /// Build from an ordered list of prefixes
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Return the first configured prefix that covers `path`, if any
    /// 
    /// A prefix covers a path when they are equal or when the path
    /// continues past the prefix at a `/` boundary.
    pub fn first_match(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| {
                path == *prefix
                    || (path.starts_with(prefix)
                        && path.as_bytes().get(prefix.len()) == Some(&b'/'))
            })
    }

    /// True when some configured prefix covers `path`
    pub fn covers(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }
}

/// The route guard: protected-path set plus the session validator
#[derive(Clone)]
pub struct RouteGuard {
    protected: ProtectedPaths,
    sessions: Sessions,
}

impl RouteGuard {
    /// Create a guard from configured prefixes and the session validator
    pub fn new(protected_paths: Vec<String>, sessions: Sessions) -> Self {
        Self {
            protected: ProtectedPaths::new(protected_paths),
            sessions,
        }
    }

    /// Decide whether a request may proceed
    /// 
    /// - Unprotected path: `Allow` unconditionally, token or not
    /// - Protected path with a token that validates: `Allow`
    /// - Protected path otherwise: `Redirect` to the login page carrying
    ///   the original path in `callbackUrl` so the client can return
    ///   after logging in
    /// 
    /// An absent, expired, malformed, and forged token all take the same
    /// redirect; the decision never exposes which it was.
    pub fn decide(&self, path: &str, token: Option<&str>) -> RouteDecision {
        if !self.protected.covers(path) {
            return RouteDecision::Allow;
        }

        match token.and_then(|t| self.sessions.validate(t)) {
            Some(_) => RouteDecision::Allow,
            None => RouteDecision::Redirect(format!("{LOGIN_PATH}?callbackUrl={path}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_guard() -> RouteGuard {
        RouteGuard::new(
            vec!["/admin".to_string(), "/api/admin".to_string()],
            Sessions::new("test-secret", 3600),
        )
    }

    fn valid_token() -> String {
        Sessions::new("test-secret", 3600)
            .issue(uuid::Uuid::new_v4())
            .unwrap()
    }

    #[test]
    fn test_unprotected_path_allows_without_token() {
        let guard = test_guard();
        assert_eq!(guard.decide("/blog", None), RouteDecision::Allow);
        assert_eq!(guard.decide("/", None), RouteDecision::Allow);
        assert_eq!(guard.decide("/api/projects", None), RouteDecision::Allow);
    }

    #[test]
    fn test_unprotected_path_allows_with_any_token() {
        let guard = test_guard();
        assert_eq!(
            guard.decide("/blog", Some("garbage")),
            RouteDecision::Allow
        );
        assert_eq!(
            guard.decide("/blog", Some(&valid_token())),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_protected_path_with_valid_token_allows() {
        let guard = test_guard();
        assert_eq!(
            guard.decide("/admin/dashboard", Some(&valid_token())),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_protected_path_without_token_redirects() {
        let guard = test_guard();
        assert_eq!(
            guard.decide("/admin/dashboard", None),
            RouteDecision::Redirect("/login?callbackUrl=/admin/dashboard".to_string())
        );
    }

    #[test]
    fn test_protected_path_with_invalid_token_redirects() {
        let guard = test_guard();
        assert_eq!(
            guard.decide("/admin", Some("not.a.token")),
            RouteDecision::Redirect("/login?callbackUrl=/admin".to_string())
        );
    }

    #[test]
    fn test_token_signed_with_other_secret_redirects() {
        let guard = test_guard();
        let forged = Sessions::new("other-secret", 3600)
            .issue(uuid::Uuid::new_v4())
            .unwrap();
        assert_eq!(
            guard.decide("/admin/posts", Some(&forged)),
            RouteDecision::Redirect("/login?callbackUrl=/admin/posts".to_string())
        );
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        let guard = test_guard();
        // "/administrator" is not beneath "/admin"
        assert_eq!(guard.decide("/administrator", None), RouteDecision::Allow);
    }

    #[test]
    fn test_multiple_prefixes_first_match_wins() {
        let paths = ProtectedPaths::new(vec![
            "/api/admin".to_string(),
            "/api".to_string(),
        ]);
        assert_eq!(paths.first_match("/api/admin/posts"), Some("/api/admin"));
        assert_eq!(paths.first_match("/api/projects"), Some("/api"));
        assert_eq!(paths.first_match("/blog"), None);
    }

    #[test]
    fn test_api_admin_prefix_is_protected() {
        let guard = test_guard();
        assert_eq!(
            guard.decide("/api/admin/projects", None),
            RouteDecision::Redirect("/login?callbackUrl=/api/admin/projects".to_string())
        );
    }
}
