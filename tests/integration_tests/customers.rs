use crate::common::test_context::TestContext;
use std::collections::BTreeMap;
use stripe_rust::{
    apis::customers::{CreateCustomerRequestBuilder, UpdateCustomerRequestBuilder},
    error::ApiErrorType,
    Error,
};
use uuid::Uuid;

#[tokio::test]
async fn create_retrieve_update_and_delete() {
    let ctx = TestContext::start().await;
    let email = format!("{}@example.com", Uuid::new_v4().simple());

    // Create a new customer
    let customer = ctx
        .client
        .customers
        .create(
            &CreateCustomerRequestBuilder::default()
                .email(email.clone())
                .name("Jenny Rosen")
                .metadata(
                    [("order_id".to_string(), "6735".to_string())]
                        .into_iter()
                        .collect(),
                )
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(customer.id.starts_with("cus_"));
    assert_eq!(customer.object, "customer");

    // Retrieve it again
    let retrieved = ctx
        .client
        .customers
        .retrieve(&customer.id, &[])
        .await
        .unwrap();
    assert_eq!(retrieved.id, customer.id);
    assert_eq!(retrieved.email, Some(email));
    assert_eq!(retrieved.name.as_deref(), Some("Jenny Rosen"));
    assert_eq!(
        retrieved.metadata.unwrap().get("order_id").map(String::as_str),
        Some("6735")
    );

    // Update the description, unset the name and clear the metadata
    let updated = ctx
        .client
        .customers
        .update(
            &customer.id,
            &UpdateCustomerRequestBuilder::default()
                .description("Regular customer")
                .name("")
                .metadata(BTreeMap::new())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("Regular customer"));
    assert_eq!(updated.name, None);
    assert!(updated.metadata.unwrap().is_empty());

    // Delete it
    let deleted = ctx.client.customers.delete(&customer.id).await.unwrap();
    assert_eq!(deleted.id, customer.id);
    assert!(deleted.deleted);

    // Deleted customers can still be retrieved
    let retrieved = ctx
        .client
        .customers
        .retrieve(&customer.id, &[])
        .await
        .unwrap();
    assert_eq!(retrieved.deleted, Some(true));
}

#[tokio::test]
async fn retrieve_not_found() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .customers
        .retrieve("cus_non_existent", &[])
        .await;

    match res {
        Err(Error::ApiError(e)) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.r#type, ApiErrorType::InvalidRequestError);
            assert_eq!(e.code.as_deref(), Some("resource_missing"));
            assert!(e.request_id.is_some());
        }
        _ => panic!("Expected a 404 error, got {:?}", res),
    }
}
