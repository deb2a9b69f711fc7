pub const HOME: &str = "/";
pub const ITEMS: &str = "/items";
pub const ITEM_DETAIL: &str = "/items/{id}";
pub const CONTACT: &str = "/contact";
pub const CONTACT_THANK_YOU: &str = "/contact/thank-you";
pub const API_ITEMS: &str = "/api/items";
pub const API_ITEM: &str = "/api/items/{id}";
pub const API_CONTACT: &str = "/api/contact";
pub const HEALTH: &str = "/health";

pub fn items_page(page: u64) -> String {
    format!("{}?page={}", ITEMS, page)
}

pub fn item_detail(id: u64) -> String {
    ITEM_DETAIL.replace("{id}", &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(items_page(3), "/items?page=3");
        assert_eq!(item_detail(42), "/items/42");
    }
}
