//! Request interception for the seller area.
//!
//! The guard is the sole gate for seller pages; `/api/...` routes are
//! outside its prefix and authenticate through the
//! `AuthenticatedSeller` extractor instead. Both consult the same
//! session store.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use namkeen_core::session::now_millis;
use tower_cookies::Cookies;
use tracing::debug;

use crate::session::SESSION_COOKIE_NAME;
use crate::{LOG_TARGET, SharedState};

/// Every path under this literal prefix is protected.
pub const SELLER_PREFIX: &str = "/seller";
/// The one carve-out, matched by exact equality.
pub const LOGIN_PATH: &str = "/seller/login";

/// Login URL carrying the originally requested path, so the seller
/// lands back where they were headed after signing in.
pub fn login_redirect_url(original_path: &str) -> String {
    format!(
        "{LOGIN_PATH}?redirect={}",
        urlencoding::encode(original_path)
    )
}

/// Verdict of the guard for a single request. Stateless across
/// requests; a pure function of path and authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the visitor to the login page, remembering where they were
    /// headed. Set unconditionally, even for the seller root itself.
    RedirectToLogin { original_path: String },
    /// Already signed in; the login page bounces to the seller root.
    RedirectToDashboard,
}

impl GuardDecision {
    /// Redirect target, if the decision is a redirect.
    pub fn location(&self) -> Option<String> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin { original_path } => {
                Some(login_redirect_url(original_path))
            }
            GuardDecision::RedirectToDashboard => Some(SELLER_PREFIX.to_owned()),
        }
    }
}

pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    if path == LOGIN_PATH {
        if authenticated {
            GuardDecision::RedirectToDashboard
        } else {
            GuardDecision::Allow
        }
    } else if path.starts_with(SELLER_PREFIX) {
        if authenticated {
            GuardDecision::Allow
        } else {
            GuardDecision::RedirectToLogin {
                original_path: path.to_owned(),
            }
        }
    } else {
        GuardDecision::Allow
    }
}

/// Axum middleware wrapping [`decide`]. Runs before every page and
/// form handler.
pub async fn seller_guard(
    State(state): State<SharedState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let raw = cookies.get(SESSION_COOKIE_NAME).map(|c| c.value().to_owned());
    let authenticated = state.sessions().validate(raw.as_deref(), now_millis());

    match decide(&path, authenticated).location() {
        Some(location) => {
            debug!(target: LOG_TARGET, %path, %location, "Seller guard redirect");
            Redirect::to(&location).into_response()
        }
        None => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_seller_page_redirects_to_login() {
        let decision = decide("/seller/dashboard", false);
        assert_eq!(
            decision.location().as_deref(),
            Some("/seller/login?redirect=%2Fseller%2Fdashboard")
        );
    }

    #[test]
    fn seller_root_redirect_still_carries_the_path() {
        let decision = decide("/seller", false);
        assert_eq!(
            decision.location().as_deref(),
            Some("/seller/login?redirect=%2Fseller")
        );
    }

    #[test]
    fn authenticated_seller_page_passes() {
        assert_eq!(decide("/seller/dashboard", true), GuardDecision::Allow);
    }

    #[test]
    fn login_page_bounces_authenticated_sellers_to_root() {
        let decision = decide(LOGIN_PATH, true);
        assert_eq!(decision, GuardDecision::RedirectToDashboard);
        assert_eq!(decision.location().as_deref(), Some("/seller"));
    }

    #[test]
    fn login_page_renders_for_unauthenticated_visitors() {
        assert_eq!(decide(LOGIN_PATH, false), GuardDecision::Allow);
    }

    #[test]
    fn login_carve_out_is_exact_equality_only() {
        let decision = decide("/seller/login2", false);
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                original_path: "/seller/login2".to_owned()
            }
        );
    }

    #[test]
    fn paths_outside_the_prefix_always_pass() {
        assert_eq!(decide("/products", false), GuardDecision::Allow);
        assert_eq!(decide("/products", true), GuardDecision::Allow);
        assert_eq!(decide("/", false), GuardDecision::Allow);
    }

    #[test]
    fn decisions_are_idempotent() {
        for (path, authed) in [
            ("/seller/dashboard", false),
            ("/seller/login", true),
            ("/products", false),
        ] {
            assert_eq!(decide(path, authed), decide(path, authed));
        }
    }
}
