use anyhow::Context;
use stripe_rust::{
    apis::{
        charges::{CaptureChargeRequestBuilder, CreateChargeRequestBuilder, ListChargesRequest},
        checkout_sessions::{CreateSessionRequestBuilder, SessionLineItemParamsBuilder, SessionMode},
    },
    ListRequest, RequestOptions, StripeClient,
};
use url::Url;

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    api_version: Option<String>,
    price_id: String,
    return_uri: Url,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Stripe client
    let mut builder = StripeClient::builder(config.api_key);
    if let Some(ref api_version) = config.api_version {
        builder = builder.with_api_version(api_version);
    }
    let stripe = builder.build();

    // Authorize a charge. The idempotency key makes it safe to retry.
    let charge = stripe
        .charges
        .with_options(RequestOptions::new().with_random_idempotency_key())
        .create(
            &CreateChargeRequestBuilder::default()
                .amount(2000)
                .currency("usd")
                .source("tok_visa")
                .capture(false)
                .description("stripe-rust demo charge")
                .build()?,
        )
        .await?;

    tracing::info!("Created new charge: {} ({:?})", charge.id, charge.status);

    // Capture part of it
    let charge = stripe
        .charges
        .capture(
            &charge.id,
            &CaptureChargeRequestBuilder::default().amount(1500).build()?,
        )
        .await?;

    tracing::info!(
        "Captured {:.2} USD",
        charge.amount_captured.unwrap_or_default() as f32 / 100.0
    );

    // List the most recent charges
    let charges = stripe
        .charges
        .list(&ListChargesRequest {
            list: ListRequest {
                limit: Some(5),
                ..Default::default()
            },
            ..Default::default()
        })
        .await?;
    for charge in &charges.data {
        tracing::info!(
            "Charge {}: {:?} {:?}",
            charge.id,
            charge.amount,
            charge.status
        );
    }

    // Let a customer pay through the hosted checkout page
    let session = stripe
        .checkout_sessions
        .create(
            &CreateSessionRequestBuilder::default()
                .mode(SessionMode::Payment)
                .success_url(config.return_uri.as_str())
                .cancel_url(config.return_uri.as_str())
                .line_items(vec![SessionLineItemParamsBuilder::default()
                    .price(config.price_id)
                    .quantity(1)
                    .build()?])
                .build()?,
        )
        .await?;

    tracing::info!(
        "Checkout page: {}",
        session.url.as_deref().unwrap_or("<none>")
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
