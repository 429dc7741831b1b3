use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use enroll_adapters::{config::AllowedOrigins, http::routes::create_user};
use enroll_core::UserStore;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Registration service: the API route plus the static client form.
pub struct RegistrationService {
    router: Router,
}

impl RegistrationService {
    /// Create a new RegistrationService over the provided user store.
    ///
    /// # Note on Architecture
    /// Stores implement Clone via an internal handle (Arc or pool) for
    /// thread-safe sharing, so the whole service is generic over the
    /// storage backend and tests can substitute the in-memory store.
    pub fn new<U>(user_store: U, assets_dir: String) -> Self
    where
        U: UserStore + Clone + 'static,
    {
        let assets_service =
            ServeDir::new(assets_dir.clone()).fallback(ServeFile::new(assets_dir + "/index.html"));

        let router = Router::new()
            .route("/api/users", post(create_user::<U>))
            .with_state(user_store)
            .fallback_service(assets_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a plain Router, optionally restricted to
    /// the given CORS origins.
    pub fn as_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the registration service as a standalone server.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        ::tracing::info!(
            "Registration service listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, router).await
    }
}
