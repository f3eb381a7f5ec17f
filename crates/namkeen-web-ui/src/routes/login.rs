use axum::Form;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use maud::{Markup, html};
use namkeen_core::session::now_millis;
use serde::Deserialize;
use tower_cookies::Cookies;
use tracing::info;

use super::Maud;
use super::cookies::CookiesExt as _;
use crate::error::RequestResult;
use crate::guard::{LOGIN_PATH, SELLER_PREFIX};
use crate::serde_util::empty_string_as_none;
use crate::{LOG_TARGET, SharedState, UiState};

#[derive(Deserialize)]
pub struct RedirectQuery {
    redirect: Option<String>,
}

pub async fn get(
    state: State<SharedState>,
    Query(query): Query<RedirectQuery>,
) -> RequestResult<impl IntoResponse> {
    Ok(Maud(state.login_page(None, query.redirect)))
}

#[derive(Deserialize)]
pub struct Input {
    email: String,
    password: String,
    #[serde(default)]
    #[serde(deserialize_with = "empty_string_as_none")]
    redirect: Option<String>,
}

pub async fn post_login(
    state: State<SharedState>,
    cookies: Cookies,
    Form(form): Form<Input>,
) -> RequestResult<Response> {
    let redirect_path = form.redirect.clone();

    if !state.sellers().verify(&form.email, &form.password) {
        // One fixed message for every failure mode; the cause is
        // logged by the directory, never echoed to the client.
        return Ok(Maud(state.login_page(
            html! {
                span ."o-loginScreen__notice" { "Invalid email or password" }
            },
            redirect_path,
        ))
        .into_response());
    }

    let token = state.sessions().create(now_millis());
    cookies.save_seller_session(&token);
    info!(target: LOG_TARGET, email = %form.email, "Seller signed in");

    // Return to the originally requested path if the guard recorded
    // one, otherwise land on the dashboard.
    let target = redirect_path
        .filter(|p| p.starts_with('/'))
        .unwrap_or_else(|| SELLER_PREFIX.to_owned());
    Ok(Redirect::to(&target).into_response())
}

pub async fn logout(
    state: State<SharedState>,
    cookies: Cookies,
) -> RequestResult<impl IntoResponse> {
    if let Some(raw) = cookies.get_seller_session() {
        state.sessions().revoke(&raw, now_millis());
    }
    cookies.clear_seller_session();

    Ok(Redirect::to(LOGIN_PATH))
}

impl UiState {
    fn login_page(
        &self,
        notification: impl Into<Option<Markup>>,
        redirect: Option<String>,
    ) -> Markup {
        let notification = notification.into();
        let content = html! {
            div id="login-screen" ."o-loginScreen" {

                form ."o-loginScreen__form"
                    action="/seller/login"
                    method="post"
                    autocomplete="on"
                {
                    @if let Some(ref redirect_path) = redirect {
                        input type="hidden" name="redirect" value=(redirect_path) {}
                    }
                    @if let Some(n) = notification {
                        (n)
                    }
                    div ."o-loginScreen__header" {
                        h4 { "Seller sign in" }
                        p { "Sign in to manage your products and orders." }
                    }
                    div ."o-loginScreen__emailLine" {
                        input ."o-loginScreen__email"
                            type="email"
                            name="email"
                            placeholder="Email"
                            autocomplete="username"
                            {}
                    }
                    div ."o-loginScreen__passwordLine" {
                        input ."o-loginScreen__password"
                            type="password"
                            name="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            {}
                        button ."o-loginScreen__submitButton u-button"
                            type="submit"
                        {
                            span ."o-loginScreen__submitButtonIcon u-buttonIcon" width="1rem" height="1rem" {}
                            "Sign in"
                        }
                    }
                }
            }
        };
        self.render_html_page("Seller sign in", content)
    }
}
