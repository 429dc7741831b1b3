pub mod config;
pub mod http;
pub mod persistence;

pub use persistence::{
    in_memory_user_store::InMemoryUserStore, postgres_user_store::PostgresUserStore,
};
