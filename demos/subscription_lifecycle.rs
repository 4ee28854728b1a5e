use anyhow::Context;
use stripe_rust::{
    apis::{
        customers::CreateCustomerRequestBuilder,
        invoices::ListInvoicesRequest,
        subscriptions::{
            CancelSubscriptionRequestBuilder, CreateSubscriptionRequestBuilder, PaymentBehavior,
            SubscriptionItemParamsBuilder,
        },
        tax_rates::{CreateTaxRateRequestBuilder, TaxType},
    },
    StripeClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    api_key: String,
    price_id: String,
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

    let stripe = StripeClient::new(config.api_key);

    let customer = stripe
        .customers
        .create(
            &CreateCustomerRequestBuilder::default()
                .name("Some One")
                .email("some.one@email.com")
                .build()?,
        )
        .await?;
    tracing::info!("Created new customer: {}", customer.id);

    let tax_rate = stripe
        .tax_rates
        .create(
            &CreateTaxRateRequestBuilder::default()
                .display_name("VAT")
                .inclusive(false)
                .percentage(20.0)
                .country("GB")
                .tax_type(TaxType::Vat)
                .build()?,
        )
        .await?;

    // Start a subscription which waits for the first payment
    let subscription = stripe
        .subscriptions
        .create(
            &CreateSubscriptionRequestBuilder::default()
                .customer(customer.id.as_str())
                .items(vec![SubscriptionItemParamsBuilder::default()
                    .price(config.price_id)
                    .quantity(1)
                    .build()?])
                .default_tax_rates(vec![tax_rate.id.clone()])
                .payment_behavior(PaymentBehavior::DefaultIncomplete)
                .expand(vec!["latest_invoice".to_string()])
                .build()?,
        )
        .await?;

    tracing::info!(
        "Created new subscription: {} ({:?})",
        subscription.id,
        subscription.status
    );

    let latest_invoice = subscription
        .latest_invoice
        .as_ref()
        .and_then(|invoice| invoice.value())
        .context("The latest invoice was not expanded")?;
    tracing::info!(
        "First invoice {}: {:.2} due",
        latest_invoice.id,
        latest_invoice.amount_due.unwrap_or_default() as f32 / 100.0
    );

    // Cancel right away and list what was billed
    let subscription = stripe
        .subscriptions
        .cancel(
            &subscription.id,
            &CancelSubscriptionRequestBuilder::default()
                .prorate(true)
                .build()?,
        )
        .await?;
    tracing::info!("Subscription is now {:?}", subscription.status);

    let invoices = stripe
        .invoices
        .list(&ListInvoicesRequest {
            subscription: Some(subscription.id.clone()),
            ..Default::default()
        })
        .await?;
    for invoice in &invoices.data {
        tracing::info!(
            "Invoice {}: {:?} {:?}",
            invoice.id,
            invoice.status,
            invoice.amount_due
        );
    }

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
