pub mod get_engine;
