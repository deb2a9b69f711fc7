use maud::{html, Markup};

use super::{page_layout, urls};

pub fn index() -> Markup {
    let body = html! {
        h2 { "Welcome to My App" }
        p {
            "Go to "
            a href=(urls::items_page(1)) { "Items List" }
        }
    };
    page_layout("Home", body)
}
