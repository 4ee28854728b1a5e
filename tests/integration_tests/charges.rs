use crate::common::test_context::TestContext;
use stripe_rust::{
    apis::{
        charges::{
            CaptureChargeRequestBuilder, ChargeStatus, CreateChargeRequestBuilder,
            NetworkStatus, UpdateChargeRequestBuilder,
        },
        customers::CreateCustomerRequestBuilder,
    },
    error::ApiErrorType,
    Error, RequestOptions,
};
use uuid::Uuid;

#[tokio::test]
async fn create_and_retrieve_with_expanded_customer() {
    let ctx = TestContext::start().await;

    let customer = ctx
        .client
        .customers
        .create(
            &CreateCustomerRequestBuilder::default()
                .email("jenny.rosen@example.com")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // Create a new charge
    let charge = ctx
        .client
        .charges
        .create(
            &CreateChargeRequestBuilder::default()
                .amount(2000)
                .currency("usd")
                .source("tok_visa")
                .description("rust-sdk-test")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(charge.id.starts_with("ch_"));
    assert_eq!(charge.amount, Some(2000));
    assert_eq!(charge.status, Some(ChargeStatus::Succeeded));
    assert_eq!(charge.captured, Some(true));
    assert_eq!(
        charge.outcome.unwrap().network_status,
        Some(NetworkStatus::ApprovedByNetwork)
    );

    // Attach the customer
    let charge = ctx
        .client
        .charges
        .update(
            &charge.id,
            &UpdateChargeRequestBuilder::default()
                .customer(customer.id.as_str())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    let customer_ref = charge.customer.as_ref().unwrap();
    assert!(!customer_ref.is_expanded());
    assert_eq!(customer_ref.id(), customer.id);

    // Retrieve it with the customer expanded
    let retrieved = ctx
        .client
        .charges
        .retrieve(&charge.id, &["customer"])
        .await
        .unwrap();
    let expanded = retrieved.customer.unwrap();
    assert!(expanded.is_expanded());
    assert_eq!(expanded.id(), customer.id);
    assert_eq!(
        expanded.value().unwrap().email.as_deref(),
        Some("jenny.rosen@example.com")
    );
}

#[tokio::test]
async fn authorize_then_capture() {
    let ctx = TestContext::start().await;

    // Authorize only
    let charge = ctx
        .client
        .charges
        .create(
            &CreateChargeRequestBuilder::default()
                .amount(2000)
                .currency("usd")
                .source("tok_visa")
                .capture(false)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(charge.captured, Some(false));

    // Capture part of the authorized amount
    let captured = ctx
        .client
        .charges
        .capture(
            &charge.id,
            &CaptureChargeRequestBuilder::default()
                .amount(1500)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(captured.captured, Some(true));
    assert_eq!(captured.amount_captured, Some(1500));

    // A charge can only be captured once
    let res = ctx
        .client
        .charges
        .capture(&charge.id, &Default::default())
        .await;
    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.r#type, ApiErrorType::InvalidRequestError);
            assert_eq!(e.code.as_deref(), Some("charge_already_captured"));
        }
        _ => panic!("Expected a 400 error, got {:?}", res),
    }
}

#[tokio::test]
async fn declined_card() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .charges
        .create(
            &CreateChargeRequestBuilder::default()
                .amount(2000)
                .currency("usd")
                .source("tok_chargeDeclined")
                .build()
                .unwrap(),
        )
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 402);
            assert_eq!(e.r#type, ApiErrorType::CardError);
            assert_eq!(e.code.as_deref(), Some("card_declined"));
            assert_eq!(e.decline_code.as_deref(), Some("generic_decline"));
            assert!(e.message.is_some());
        }
        _ => panic!("Expected a card error, got {:?}", res),
    }
}

#[tokio::test]
async fn idempotent_create_is_replayed() {
    let ctx = TestContext::start().await;

    let charges = ctx.client.charges.with_options(
        RequestOptions::new().with_idempotency_key(Uuid::new_v4().to_string()),
    );
    let create_charge_request = CreateChargeRequestBuilder::default()
        .amount(1000)
        .currency("usd")
        .source("tok_visa")
        .build()
        .unwrap();

    let first = charges.create(&create_charge_request).await.unwrap();
    let second = charges.create(&create_charge_request).await.unwrap();

    assert_eq!(first.id, second.id);
}
