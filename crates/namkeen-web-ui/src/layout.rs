use maud::{DOCTYPE, Markup, html};

use crate::UiState;

impl UiState {
    /// Full HTML page with the storefront chrome.
    pub(crate) fn render_html_page(&self, page_title: &str, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en";
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="color-scheme" content="light dark";
                title { (page_title) }
            }
            body ."o-body" {
                (render_top_nav())
                main ."o-mainBar" { (content) }
            }
        }
    }
}

fn render_top_nav() -> Markup {
    html! {
        div ."o-topNav" {
            a ."o-topNav__item" href="/products" {
                span ."o-topNav__icon -home" {}
                "Namkeen Bhandar"
            }
            a ."o-topNav__item" href="/seller" {
                span ."o-topNav__icon -seller" {}
                "Seller area"
            }
        }
    }
}
