pub mod common;
pub mod engine;
pub mod health;
pub mod recipe;
