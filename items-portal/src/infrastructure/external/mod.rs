pub mod items_client;
