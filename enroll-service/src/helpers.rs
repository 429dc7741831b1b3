use enroll_adapters::config::prod;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create the shared PostgreSQL connection pool.
///
/// Bounded pool with the idle and connect timeouts configured once at
/// process startup; every request borrows from this pool.
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(prod::postgres::MAX_CONNECTIONS)
        .idle_timeout(prod::postgres::IDLE_TIMEOUT)
        .acquire_timeout(prod::postgres::CONNECT_TIMEOUT)
        .connect(url)
        .await
}
