pub mod contact;
pub mod items;
pub mod pages;
