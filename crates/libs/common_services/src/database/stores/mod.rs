pub mod user_store;
