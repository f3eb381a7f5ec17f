//! Seller JSON API.
//!
//! These routes sit outside the page guard's path prefix, so each
//! handler authenticates through [`AuthenticatedSeller`], which
//! consults the same session store as the page guard. Rejections are
//! status codes, never page redirects.

use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use namkeen_core::session::now_millis;
use serde::Serialize;
use tower_cookies::Cookies;

use super::AppJson;
use super::cookies::CookiesExt as _;
use crate::SharedState;
use crate::error::{AuthRequiredSnafu, InternalServerSnafu, RequestError, RequestResult};

/// Proof that the request carried a valid seller session.
pub struct AuthenticatedSeller;

impl FromRequestParts<SharedState> for AuthenticatedSeller {
    type Rejection = RequestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| InternalServerSnafu { msg }.build())?;

        let raw = cookies.get_seller_session();
        if !state.sessions().validate(raw.as_deref(), now_millis()) {
            return AuthRequiredSnafu.fail();
        }

        Ok(AuthenticatedSeller)
    }
}

#[derive(Serialize)]
pub struct Order {
    pub tracking_number: String,
    pub item: String,
    pub quantity: u32,
    pub status: &'static str,
}

/// Stand-in order data; the real order store lives outside this
/// service.
pub async fn list_orders(
    _state: State<SharedState>,
    _seller: AuthenticatedSeller,
) -> RequestResult<AppJson<Vec<Order>>> {
    Ok(AppJson(vec![
        Order {
            tracking_number: "NMK-482910".to_owned(),
            item: "Bhujia 400g".to_owned(),
            quantity: 2,
            status: "shipped",
        },
        Order {
            tracking_number: "NMK-482911".to_owned(),
            item: "Chakli 250g".to_owned(),
            quantity: 1,
            status: "packed",
        },
    ]))
}
