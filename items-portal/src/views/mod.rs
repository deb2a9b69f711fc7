use maud::{html, Markup, DOCTYPE};

pub mod contact;
pub mod errors;
pub mod home;
pub mod items;
pub mod urls;

const STYLESHEET: &str = r#"
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
nav a { margin-right: 1rem; }
.section { border: 2px solid #ddd; padding: 1rem; }
.pagination { margin-top: 1rem; display: flex; gap: 0.5rem; flex-wrap: wrap; }
.pagination a, .pagination span { padding: 0.25rem 0.5rem; border: 1px solid #ccc; border-radius: 4px; text-decoration: none; color: black; }
.pagination span.ellipsis { border: none; }
.pagination a.current { border: 2px solid blue; background: #e0f0ff; }
form { display: flex; flex-direction: column; gap: 0.5rem; }
.error { color: #b00020; }
"#;

pub fn page_layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (maud::PreEscaped(STYLESHEET)) }
            }
            body {
                (navbar())
                main { (body) }
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        nav {
            a href=(urls::HOME) { "Home" }
            a href=(urls::items_page(1)) { "Items" }
            a href=(urls::CONTACT) { "Contact" }
        }
    }
}

/// 列表页和详情页共用的外框
pub fn items_section(body: Markup) -> Markup {
    html! {
        div class="section" {
            h2 { "Items Section" }
            (body)
        }
    }
}
