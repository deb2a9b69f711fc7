pub mod external;
pub mod mail;
