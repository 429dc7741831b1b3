pub mod helpers;
pub mod registration_service;
pub mod tracing;

pub use helpers::get_postgres_pool;
pub use registration_service::RegistrationService;
