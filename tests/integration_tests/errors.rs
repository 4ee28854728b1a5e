use crate::common::test_context::TestContext;
use stripe_rust::{
    apis::customers::ListCustomersRequest, error::ApiErrorType, Error, StripeClient,
};

#[tokio::test]
async fn invalid_api_key() {
    let ctx = TestContext::start().await;

    // Same environment, wrong key
    let client = StripeClient::builder("sk_test_invalid")
        .with_retry_policy(None)
        .with_environment(ctx.stripe_environment())
        .build();

    let res = client
        .customers
        .list(&ListCustomersRequest::default())
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 401);
            assert_eq!(e.r#type, ApiErrorType::AuthenticationError);
        }
        _ => panic!("Expected an authentication error, got {:?}", res),
    }
}

#[tokio::test]
async fn invalid_api_key_with_retries_enabled() {
    let ctx = TestContext::start().await;

    // 401 is not a transient failure, so the default retry policy gives up immediately
    let client = StripeClient::builder("sk_test_invalid")
        .with_environment(ctx.stripe_environment())
        .build();

    let res = client
        .customers
        .retrieve("cus_non_existent", &[])
        .await;

    assert!(matches!(
        res,
        Err(Error::ApiError(ref e)) if e.r#type == ApiErrorType::AuthenticationError
    ));
}
