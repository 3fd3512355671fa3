pub mod whitelist_api;
