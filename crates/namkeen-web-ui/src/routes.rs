pub mod api;
mod cookies;
mod login;
mod pages;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use maud::Markup;
use tower_cookies::CookieManagerLayer;

use crate::error::UserErrorResponse;
use crate::{SharedState, guard};

#[derive(Clone, Debug)]
#[must_use]
pub struct Maud(pub Markup);

impl IntoResponse for Maud {
    fn into_response(self) -> Response {
        (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            )],
            self.0.0,
        )
            .into_response()
    }
}

pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        AppJson(UserErrorResponse {
            message: "Not Found".to_string(),
        }),
    )
}

pub fn route_handler(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/products", get(pages::get_products))
        .route("/seller", get(pages::get_dashboard))
        .route("/seller/dashboard", get(pages::get_dashboard))
        .route("/seller/login", get(login::get).post(login::post_login))
        .route("/seller/logout", post(login::logout))
        .route("/api/seller/orders", get(api::list_orders))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::seller_guard,
        ))
        // Outermost, so cookies are available to the guard.
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::permanent("/products")
}
