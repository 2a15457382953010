pub mod controller;
pub mod route;
