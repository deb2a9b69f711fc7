pub mod contact_service;
pub mod item_service;
