use color_eyre::eyre::Result;
use enroll_adapters::{
    PostgresUserStore,
    config::{Settings, prod},
};
use enroll_service::{RegistrationService, get_postgres_pool};
use secrecy::ExposeSecret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    dotenvy::dotenv().ok();

    // Missing DATABASE_URL is fatal, before any request is served
    let settings = Settings::load()?;

    // Setup database connection pool
    let pg_pool = get_postgres_pool(settings.database_url.expose_secret()).await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    // Create the store
    let user_store = PostgresUserStore::new(pg_pool);

    let service = RegistrationService::new(user_store, "assets".to_string());

    let listener = tokio::net::TcpListener::bind(prod::APP_ADDRESS).await?;
    service
        .run_standalone(listener, settings.allowed_origins())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
