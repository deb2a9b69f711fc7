use maud::{html, Markup};

use super::{page_layout, urls};

/// `what` 描述缺失的资源，例如 "item with ID 7"
pub fn not_found(what: &str) -> Markup {
    let body = html! {
        a href=(urls::HOME) { "← Back to Home" }
        h1 class="error" { "Not Found" }
        p { "The " (what) " does not exist." }
    };
    page_layout("Not Found", body)
}

pub fn internal_error() -> Markup {
    let body = html! {
        a href=(urls::HOME) { "← Back to Home" }
        h1 class="error" { "Something went wrong" }
        p { "Please try again later." }
    };
    page_layout("Error", body)
}
