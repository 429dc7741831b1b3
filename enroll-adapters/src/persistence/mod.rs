pub mod in_memory_user_store;
pub mod postgres_user_store;
