use axum::extract::State;
use maud::html;

use super::Maud;
use crate::SharedState;
use crate::error::RequestResult;

/// Public storefront page; the guard never touches it.
pub async fn get_products(state: State<SharedState>) -> RequestResult<Maud> {
    Ok(Maud(state.render_html_page(
        "Namkeen Bhandar",
        html! {
            div ."o-productList" {
                h4 { "Namkeen Bhandar" }
                p { "Crispy chakli, bhujia, banana chips and more, shipped fresh." }
            }
        },
    )))
}

/// Seller landing page. Reached only through the guard, so anyone who
/// gets here holds a valid session.
pub async fn get_dashboard(state: State<SharedState>) -> RequestResult<Maud> {
    Ok(Maud(state.render_html_page(
        "Seller dashboard",
        html! {
            div ."o-sellerDashboard" {
                h4 { "Seller dashboard" }
                p { "Orders, inventory and payouts." }
                form action="/seller/logout" method="post" {
                    button ."u-button" type="submit" { "Log out" }
                }
            }
        },
    )))
}
