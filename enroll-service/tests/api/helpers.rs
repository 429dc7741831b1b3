use enroll_adapters::{InMemoryUserStore, config::test};
use enroll_service::RegistrationService;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub user_store: InMemoryUserStore,
}

/// Spawn the service on an ephemeral port, backed by the in-memory
/// store so no database is needed.
pub async fn spawn_app() -> TestApp {
    let user_store = InMemoryUserStore::new();
    let service = RegistrationService::new(user_store.clone(), "assets".to_string());

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .expect("Failed to bind ephemeral port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(service.run_standalone(listener, None));

    TestApp {
        address,
        client: reqwest::Client::new(),
        user_store,
    }
}

impl TestApp {
    pub async fn post_user(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/users", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
