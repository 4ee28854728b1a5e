use crate::common::mock_server::StripeMockServer;
use stripe_rust::{client::Environment, StripeClient};
use uuid::Uuid;

pub struct TestContext {
    pub client: StripeClient,
    mock_server: StripeMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Generate a new random API key for this specific test
        let api_key = format!("sk_test_{}", Uuid::new_v4().simple());

        // Setup a new mock server
        let mock_server = StripeMockServer::start(&api_key).await;

        // Configure a new StripeClient to point to the mock server
        let client = StripeClient::builder(api_key)
            .with_retry_policy(None) // Disable retries against the mock server
            .with_environment(Environment::from_single_url(mock_server.url()))
            .build();

        Self {
            client,
            mock_server,
        }
    }

    pub fn stripe_environment(&self) -> Environment {
        Environment::from_single_url(self.mock_server.url())
    }
}
