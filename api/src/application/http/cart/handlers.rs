pub mod confirm_cart;
