pub mod entity;
pub mod normalizer;
pub mod prompt;
