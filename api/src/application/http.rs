pub mod cart;
pub mod engine;
pub mod health;
pub mod recipe;
pub mod server;
