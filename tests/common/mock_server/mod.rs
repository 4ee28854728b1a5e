mod middlewares;
mod routes;

use crate::common::mock_server::middlewares::MiddlewareFn;
use actix_web::{web, App, HttpServer};
use reqwest::Url;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::oneshot;

/// Test token which is always declined by the mock card network.
static DECLINED_CARD_TOKEN: &str = "tok_chargeDeclined";

#[derive(Clone)]
struct MockServerConfiguration {
    api_key: String,
}

#[derive(Clone, Default)]
struct MockServerStorageInner {
    /// Customers in creation order.
    customers: Vec<Value>,
    charges: HashMap<String, Value>,
    /// Responses already sent, keyed by idempotency key.
    idempotent_responses: HashMap<String, (u16, Value)>,
}

/// In-memory storage for resources created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for Stripe APIs used in local integration tests.
pub struct StripeMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StripeMockServer {
    pub async fn start(api_key: &str) -> Self {
        let configuration = MockServerConfiguration {
            api_key: api_key.to_string(),
        };

        // Setup the in-memory storage
        let storage = MockServerStorage::default();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(storage.clone()))
                // Every request must carry the client headers and the API key
                .wrap(MiddlewareFn::new(middlewares::ensure_form_encoded))
                .wrap(MiddlewareFn::new(middlewares::authenticate(
                    configuration.clone(),
                )))
                .wrap(MiddlewareFn::new(middlewares::validate_user_agent))
                // Mock routes
                .service(
                    web::resource("/v1/customers")
                        .route(web::post().to(routes::create_customer))
                        .route(web::get().to(routes::list_customers)),
                )
                .service(
                    web::resource("/v1/customers/{id}")
                        .route(web::get().to(routes::get_customer_by_id))
                        .route(web::post().to(routes::update_customer))
                        .route(web::delete().to(routes::delete_customer)),
                )
                .service(
                    web::resource("/v1/charges").route(web::post().to(routes::create_charge)),
                )
                .service(
                    web::resource("/v1/charges/{id}")
                        .route(web::get().to(routes::get_charge_by_id))
                        .route(web::post().to(routes::update_charge)),
                )
                .service(
                    web::resource("/v1/charges/{id}/capture")
                        .route(web::post().to(routes::capture_charge)),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Drop for StripeMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
