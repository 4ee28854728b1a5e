use crate::common::mock_server::{MockServerStorage, DECLINED_CARD_TOKEN};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Form-encoded body or query string, kept as ordered pairs.
struct Form(Vec<(String, String)>);

impl Form {
    fn parse(input: &[u8]) -> Self {
        Self(url::form_urlencoded::parse(input).into_owned().collect())
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Values of a scalar array, sent as `key[]=a&key[]=b`.
    fn get_all(&self, key: &str) -> Vec<&str> {
        let key = format!("{}[]", key);
        self.0
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Entries of a map, sent as `key[name]=value`.
    fn get_map(&self, key: &str) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(key)?
                    .strip_prefix('[')?
                    .strip_suffix(']')
                    .map(|name| (name, v.as_str()))
            })
            .collect()
    }
}

pub(super) fn error_response(
    status: StatusCode,
    r#type: &str,
    code: Option<&str>,
    message: &str,
) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Request-Id", request_id()))
        .json(json!({
            "error": {
                "type": r#type,
                "code": code,
                "message": message
            }
        }))
}

fn not_found(kind: &str, id: &str) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "invalid_request_error",
        Some("resource_missing"),
        &format!("No such {}: '{}'", kind, id),
    )
}

fn ok(body: &Value) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Request-Id", request_id()))
        .json(body)
}

fn request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Applies `metadata[key]=value` updates, where an empty value deletes the key.
fn merge_metadata(resource: &mut Value, form: &Form) {
    let mut metadata = resource["metadata"].as_object().cloned().unwrap_or_default();
    if form.get("metadata") == Some("") {
        metadata.clear();
    }
    for (key, value) in form.get_map("metadata") {
        if value.is_empty() {
            metadata.remove(key);
        } else {
            metadata.insert(key.to_string(), json!(value));
        }
    }
    resource["metadata"] = Value::Object(metadata);
}

/// Applies updates to plain string fields, where an empty value unsets the field.
fn merge_strings(resource: &mut Value, form: &Form, fields: &[&str]) {
    for field in fields {
        if let Some(value) = form.get(field) {
            resource[*field] = if value.is_empty() {
                Value::Null
            } else {
                json!(value)
            };
        }
    }
}

/// POST /v1/customers
pub(super) async fn create_customer(
    storage: web::Data<MockServerStorage>,
    body: web::Bytes,
) -> HttpResponse {
    let form = Form::parse(&body);

    let mut customer = json!({
        "id": new_id("cus"),
        "object": "customer",
        "balance": form.get_i64("balance").unwrap_or(0),
        "created": Utc::now().timestamp(),
        "delinquent": false,
        "livemode": false,
        "metadata": {}
    });
    merge_strings(
        &mut customer,
        &form,
        &["description", "email", "name", "phone"],
    );
    merge_metadata(&mut customer, &form);

    storage.write().unwrap().customers.push(customer.clone());

    ok(&customer)
}

/// GET /v1/customers
pub(super) async fn list_customers(
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
) -> HttpResponse {
    let query = Form::parse(req.query_string().as_bytes());
    let limit = query.get_i64("limit").unwrap_or(10).clamp(1, 100) as usize;

    let storage = storage.read().unwrap();

    // Newest first, skipping deleted customers
    let mut customers = storage
        .customers
        .iter()
        .rev()
        .filter(|c| c["deleted"] != json!(true))
        .filter(|c| query.get("email").map_or(true, |email| c["email"] == json!(email)))
        .collect::<Vec<_>>();

    if let Some(starting_after) = query.get("starting_after") {
        match customers.iter().position(|c| c["id"] == json!(starting_after)) {
            Some(idx) => {
                customers.drain(..=idx);
            }
            None => return not_found("customer", starting_after),
        }
    }

    let has_more = customers.len() > limit;
    customers.truncate(limit);

    ok(&json!({
        "object": "list",
        "data": customers,
        "has_more": has_more,
        "url": "/v1/customers"
    }))
}

/// GET /v1/customers/{id}
pub(super) async fn get_customer_by_id(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();

    storage
        .read()
        .unwrap()
        .customers
        .iter()
        .find(|c| c["id"] == json!(id))
        .map_or_else(|| not_found("customer", &id), ok)
}

/// POST /v1/customers/{id}
pub(super) async fn update_customer(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();
    let form = Form::parse(&body);

    let mut storage = storage.write().unwrap();
    let customer = match storage
        .customers
        .iter_mut()
        .find(|c| c["id"] == json!(id) && c["deleted"] != json!(true))
    {
        Some(customer) => customer,
        None => return not_found("customer", &id),
    };

    merge_strings(
        customer,
        &form,
        &["description", "email", "name", "phone"],
    );
    merge_metadata(customer, &form);

    ok(customer)
}

/// DELETE /v1/customers/{id}
pub(super) async fn delete_customer(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut storage = storage.write().unwrap();
    let customer = match storage
        .customers
        .iter_mut()
        .find(|c| c["id"] == json!(id) && c["deleted"] != json!(true))
    {
        Some(customer) => customer,
        None => return not_found("customer", &id),
    };

    // Deleted customers can still be retrieved, as a bare marker
    *customer = json!({
        "id": id,
        "object": "customer",
        "deleted": true
    });

    ok(customer)
}

/// POST /v1/charges
pub(super) async fn create_charge(
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    let idempotency_key = req
        .headers()
        .get("Idempotency-Key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut storage = storage.write().unwrap();

    // Replay the original response when the same idempotency key is reused
    if let Some((status, body)) = idempotency_key
        .as_ref()
        .and_then(|key| storage.idempotent_responses.get(key))
    {
        return HttpResponse::build(StatusCode::from_u16(*status).unwrap())
            .insert_header(("Request-Id", request_id()))
            .insert_header(("Idempotent-Replayed", "true"))
            .json(body);
    }

    let form = Form::parse(&body);
    let (amount, currency) = match (form.get_i64("amount"), form.get("currency")) {
        (Some(amount), Some(currency)) => (amount, currency),
        (None, _) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                Some("parameter_missing"),
                "Missing required param: amount.",
            )
        }
        (_, None) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                Some("parameter_missing"),
                "Missing required param: currency.",
            )
        }
    };

    if let Some(customer) = form.get("customer") {
        if !storage.customers.iter().any(|c| c["id"] == json!(customer)) {
            return not_found("customer", customer);
        }
    }

    let id = new_id("ch");
    let (status, body) = if form.get("source") == Some(DECLINED_CARD_TOKEN) {
        (
            402,
            json!({
                "error": {
                    "type": "card_error",
                    "code": "card_declined",
                    "decline_code": "generic_decline",
                    "charge": id,
                    "message": "Your card was declined."
                }
            }),
        )
    } else {
        let captured = form.get("capture") != Some("false");
        let mut charge = json!({
            "id": id,
            "object": "charge",
            "amount": amount,
            "amount_captured": if captured { amount } else { 0 },
            "amount_refunded": 0,
            "captured": captured,
            "created": Utc::now().timestamp(),
            "currency": currency,
            "customer": form.get("customer"),
            "livemode": false,
            "metadata": {},
            "outcome": {
                "network_status": "approved_by_network",
                "risk_level": "normal",
                "seller_message": "Payment complete.",
                "type": "authorized"
            },
            "paid": true,
            "refunded": false,
            "status": "succeeded"
        });
        merge_strings(
            &mut charge,
            &form,
            &["description", "receipt_email", "statement_descriptor"],
        );
        merge_metadata(&mut charge, &form);
        storage.charges.insert(id, charge.clone());

        (200, charge)
    };

    if let Some(key) = idempotency_key {
        storage
            .idempotent_responses
            .insert(key, (status, body.clone()));
    }

    if status == 200 {
        ok(&body)
    } else {
        HttpResponse::build(StatusCode::from_u16(status).unwrap())
            .insert_header(("Request-Id", request_id()))
            .json(body)
    }
}

/// GET /v1/charges/{id}
pub(super) async fn get_charge_by_id(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let id = path.into_inner();
    let query = Form::parse(req.query_string().as_bytes());

    let storage = storage.read().unwrap();
    let mut charge = match storage.charges.get(&id) {
        Some(charge) => charge.clone(),
        None => return not_found("charge", &id),
    };

    // Replace the customer id with the full object when expanded
    if query.get_all("expand").contains(&"customer") {
        if let Some(customer_id) = charge["customer"].as_str().map(str::to_string) {
            charge["customer"] = storage
                .customers
                .iter()
                .find(|c| c["id"] == json!(customer_id))
                .cloned()
                .unwrap_or(Value::Null);
        }
    }

    ok(&charge)
}

/// POST /v1/charges/{id}
pub(super) async fn update_charge(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();
    let form = Form::parse(&body);

    let mut storage = storage.write().unwrap();

    if let Some(customer) = form.get("customer") {
        if !storage.customers.iter().any(|c| c["id"] == json!(customer)) {
            return not_found("customer", customer);
        }
    }

    let charge = match storage.charges.get_mut(&id) {
        Some(charge) => charge,
        None => return not_found("charge", &id),
    };

    if form.get("customer").is_some() && !charge["customer"].is_null() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            None,
            "The customer of a charge can only be set once.",
        );
    }

    merge_strings(
        charge,
        &form,
        &["customer", "description", "receipt_email"],
    );
    merge_metadata(charge, &form);

    ok(charge)
}

/// POST /v1/charges/{id}/capture
pub(super) async fn capture_charge(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();
    let form = Form::parse(&body);

    let mut storage = storage.write().unwrap();
    let charge = match storage.charges.get_mut(&id) {
        Some(charge) => charge,
        None => return not_found("charge", &id),
    };

    if charge["captured"] == json!(true) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            Some("charge_already_captured"),
            &format!("Charge {} has already been captured.", id),
        );
    }

    let authorized = charge["amount"].as_i64().unwrap_or_default();
    let amount = form.get_i64("amount").unwrap_or(authorized);
    if amount > authorized {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            Some("amount_too_large"),
            "Amount to capture is greater than the authorized amount.",
        );
    }

    charge["captured"] = json!(true);
    charge["amount_captured"] = json!(amount);
    charge["amount_refunded"] = json!(authorized - amount);

    ok(charge)
}
