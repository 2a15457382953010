pub mod app_state;
pub mod caption;
pub mod health;
pub mod http_server;
