use stripe_rust::{client::Environment, StripeClient};

pub struct TestContext {
    pub client: StripeClient,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the test mode API key from the env
        let api_key = std::env::var("ACCEPTANCE_TESTS_STRIPE_API_KEY").unwrap();
        assert!(
            api_key.starts_with("sk_test_"),
            "Acceptance tests must run with a test mode key"
        );

        let client = StripeClient::builder(api_key)
            .with_environment(Environment::Live)
            .build();

        Self { client }
    }

    pub fn stripe_environment(&self) -> Environment {
        Environment::Live
    }
}
