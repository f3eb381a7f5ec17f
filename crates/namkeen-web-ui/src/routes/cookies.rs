use namkeen_core::session::SessionToken;
use tower_cookies::{Cookie, Cookies};

use crate::session::SESSION_COOKIE_NAME;

pub(crate) trait CookiesExt {
    /// Raw value of the seller session cookie, if present.
    fn get_seller_session(&self) -> Option<String>;

    /// Set the session cookie for a freshly minted token.
    fn save_seller_session(&self, token: &SessionToken);

    /// Clear the session cookie: empty value, expiry in the past.
    fn clear_seller_session(&self);
}

impl CookiesExt for Cookies {
    fn get_seller_session(&self) -> Option<String> {
        self.get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned())
    }

    fn save_seller_session(&self, token: &SessionToken) {
        let mut cookie = Cookie::new(SESSION_COOKIE_NAME, token.to_string());
        cookie.set_path("/");
        cookie.set_http_only(true);
        self.add(cookie);
    }

    fn clear_seller_session(&self) {
        let mut cookie = Cookie::new(SESSION_COOKIE_NAME, "");
        cookie.set_path("/");
        cookie.set_expires(time::OffsetDateTime::UNIX_EPOCH);
        self.add(cookie);
    }
}
