pub mod caption_response;
pub mod health_response;
pub mod openai;
