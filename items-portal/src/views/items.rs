use maud::{html, Markup};

use super::{items_section, page_layout, urls};
use crate::domain::models::item::Item;
use crate::domain::services::item_service::ItemListing;
use crate::utils::pagination::PaginationWindow;

pub fn list(listing: &ItemListing) -> Markup {
    let current_page = listing.window.current_page;
    let body = html! {
        h2 { "Items List (Page " (current_page) ")" }
        @if listing.page.items.is_empty() {
            p { "No items to show." }
        } @else {
            ul {
                @for item in &listing.page.items {
                    li { a href=(urls::item_detail(item.id)) { (item.title) } }
                }
            }
        }
        (pagination(&listing.window))
    };
    page_layout("Items", items_section(body))
}

/// 首页/上一页、省略号、页码、省略号、下一页/末页
pub fn pagination(window: &PaginationWindow) -> Markup {
    html! {
        nav class="pagination" {
            @if window.show_first() {
                a href=(urls::items_page(1)) { "First" }
            }
            @if window.show_prev() {
                a href=(urls::items_page(window.prev_page())) { "Prev" }
            }
            @if window.leading_ellipsis() {
                span class="ellipsis" { "…" }
            }
            @for &num in &window.page_numbers {
                @if window.is_current(num) {
                    a class="current" href=(urls::items_page(num)) aria-current="page" { (num) }
                } @else {
                    a href=(urls::items_page(num)) { (num) }
                }
            }
            @if window.trailing_ellipsis() {
                span class="ellipsis" { "…" }
            }
            @if window.show_next() {
                a href=(urls::items_page(window.next_page())) { "Next" }
            }
            @if window.show_last() {
                a href=(urls::items_page(window.total_pages)) { "Last" }
            }
        }
    }
}

pub fn detail(item: &Item) -> Markup {
    let body = html! {
        a href=(urls::HOME) { "← Back to Home" }
        h1 { (item.title) }
        p { (item.body) }
    };
    page_layout(&item.title, items_section(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::pagination::compute_window;

    #[test]
    fn test_pagination_controls_in_middle() {
        let html = pagination(&compute_window(10, 20, 5)).into_string();

        assert!(html.contains(r#"href="/items?page=1">First"#));
        assert!(html.contains(r#"href="/items?page=9">Prev"#));
        assert!(html.contains(r#"href="/items?page=11">Next"#));
        assert!(html.contains(r#"href="/items?page=20">Last"#));
        assert_eq!(html.matches('…').count(), 2);
        assert!(html.contains(r#"class="current" href="/items?page=10""#));
        assert!(!html.contains(r#"href="/items?page=7""#));
    }

    #[test]
    fn test_pagination_single_page_has_no_controls() {
        let html = pagination(&compute_window(1, 1, 5)).into_string();

        assert!(!html.contains("First"));
        assert!(!html.contains("Prev"));
        assert!(!html.contains("Next"));
        assert!(!html.contains("Last"));
        assert!(!html.contains('…'));
    }

    #[test]
    fn test_detail_escapes_upstream_content() {
        let item = Item {
            id: 1,
            title: "<b>bold</b>".to_string(),
            body: "a & b".to_string(),
        };
        let html = detail(&item).into_string();

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
