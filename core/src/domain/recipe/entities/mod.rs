pub mod cart;
pub mod generation;
pub mod recipe_card;

pub use cart::*;
pub use generation::*;
pub use recipe_card::*;
