pub mod contact;
pub mod item;
