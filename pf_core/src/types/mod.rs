pub mod message;
pub mod platform;
