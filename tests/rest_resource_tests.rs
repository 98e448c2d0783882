//! Integration tests for the generic resource protocol.
//!
//! These tests verify envelope unwrapping, argument validation, path
//! derivation and the dispatch behavior of retrieve/list/create/update/
//! delete/save against a mock server.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tassi_api::rest::resource as ops;
use tassi_api::{
    ApiError, ApiKey, Carrier, HttpClient, Marketplace, Object, Package, Resource, Shipment,
    TassiConfig,
};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> HttpClient {
    HttpClient::new(
        TassiConfig::builder(ApiKey::new("test_api_key"))
            .api_base(server.uri())
            .build(),
    )
}

/// Builds a mapped object from a JSON literal.
fn object_from(value: Value) -> Object {
    match value {
        Value::Object(map) => Object::from_json_map(map),
        other => panic!("expected an object literal, got {other:?}"),
    }
}

// ============================================================================
// Retrieve
// ============================================================================

#[tokio::test]
async fn test_retrieve_unwraps_resource_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package": {
                "id": 4,
                "tracking_number": "tassi_TRK_CFE667F2DB8E9578",
                "status": "in_transit",
                "insurance": false,
                "signature_required": true
            }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::retrieve(&client, Some(4_u64.into())).await.unwrap();

    assert_eq!(package.get_i64("id"), Some(4));
    assert_eq!(package.get_str("status"), Some("in_transit"));
    assert_eq!(
        package.get_str("tracking_number"),
        Some("tassi_TRK_CFE667F2DB8E9578")
    );
    assert_eq!(package.get_bool("insurance"), Some(false));
    assert_eq!(package.get_bool("signature_required"), Some(true));
}

#[tokio::test]
async fn test_retrieve_uses_bare_payload_when_not_enveloped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 4, "status": "delivered"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::retrieve(&client, Some(4_u64.into())).await.unwrap();

    assert_eq!(package.get_i64("id"), Some(4));
    assert_eq!(package.get_str("status"), Some("delivered"));
}

#[tokio::test]
async fn test_retrieve_none_id_fails_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let package_error = Package::retrieve(&client, None).await.unwrap_err();
    let carrier_error = Carrier::retrieve(&client, None).await.unwrap_err();
    let marketplace_error = Marketplace::retrieve(&client, None).await.unwrap_err();

    for (error, name) in [
        (&package_error, "package"),
        (&carrier_error, "carrier"),
        (&marketplace_error, "marketplace"),
    ] {
        assert!(matches!(error, ApiError::InvalidRequest { .. }));
        assert!(error.to_string().contains(name));
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_retrieve_string_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carriers/car_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carrier": {"id": "car_9", "name": "Benin Express"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let carrier = Carrier::retrieve(&client, Some("car_9".into())).await.unwrap();
    assert_eq!(carrier.get_str("name"), Some("Benin Express"));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_returns_whole_payload_without_unwrapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "packages": [
                {"id": 1, "status": "created"},
                {"id": 2, "status": "in_transit"},
                {"id": 3, "status": "delivered"}
            ],
            "meta": {"current_page": 1, "total_count": 3}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let listing = Package::list(&client, None).await.unwrap();

    let packages = listing.get_array("packages").unwrap();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[0].as_object().unwrap().get_i64("id"), Some(1));
    assert_eq!(packages[2].as_object().unwrap().get_str("status"), Some("delivered"));

    let meta = listing.get_object("meta").unwrap();
    assert_eq!(meta.get_i64("total_count"), Some(3));
}

#[tokio::test]
async fn test_list_forwards_params_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"packages": [], "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let listing = Package::list(&client, Some(json!({"page": 2, "per_page": 10})))
        .await
        .unwrap();
    assert_eq!(listing.get_array("packages").unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_non_mapping_params_fail_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let error = Package::list(&client, Some(json!(["not", "a", "mapping"])))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::InvalidRequest { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Create / Update
// ============================================================================

#[tokio::test]
async fn test_create_posts_to_collection_path_and_unwraps() {
    let params = json!({
        "shipment": {
            "marketplace_id": "123",
            "customer": {"first_name": "John", "last_name": "Doe"}
        }
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shipments"))
        .and(body_json(params.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipment": {"id": "ship_123", "status": "created"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let shipment = Shipment::create(&client, Some(params)).await.unwrap();

    assert_eq!(shipment.get_str("id"), Some("ship_123"));
    assert_eq!(shipment.get_str("status"), Some("created"));
}

#[tokio::test]
async fn test_create_non_mapping_params_fail_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let error = Shipment::create(&client, Some(json!("oops"))).await.unwrap_err();
    assert!(matches!(error, ApiError::InvalidRequest { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_puts_to_instance_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/packages/4"))
        .and(body_json(json!({"status": "delivered"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package": {"id": 4, "status": "delivered"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::update(
        &client,
        Some(4_u64.into()),
        Some(json!({"status": "delivered"})),
    )
    .await
    .unwrap();

    assert_eq!(package.get_str("status"), Some("delivered"));
}

#[tokio::test]
async fn test_update_none_id_fails_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let error = Package::update(&client, None, Some(json!({"status": "lost"})))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::InvalidRequest { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Save
// ============================================================================

#[tokio::test]
async fn test_save_without_identifier_creates_at_collection_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/packages"))
        .and(body_json(json!({"status": "created", "weight": "5.0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package": {"id": 77, "status": "created", "weight": "5.0"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut package = Package::new();
    package.set("status", "created");
    package.set("weight", "5.0");

    let saved = package.save(&client).await.unwrap();
    assert_eq!(saved.id(), Some(77_u64.into()));
}

#[tokio::test]
async fn test_save_with_identifier_updates_at_instance_path() {
    let server = MockServer::start().await;
    // The identifier goes into the path, never into the body.
    Mock::given(method("PUT"))
        .and(path("/packages/4"))
        .and(body_json(json!({"status": "delivered", "weight": "15.0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package": {"id": 4, "status": "delivered", "weight": "15.0"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::from_object(object_from(json!({
        "id": 4,
        "status": "delivered",
        "weight": "15.0"
    })));

    let saved = package.save(&client).await.unwrap();
    assert_eq!(saved.get_str("weight"), Some("15.0"));
}

// ============================================================================
// Delete
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Delivery {
    object: Object,
}

impl Resource for Delivery {
    const NAME: &'static str = "delivery";

    fn from_object(object: Object) -> Self {
        Self { object }
    }

    fn object(&self) -> &Object {
        &self.object
    }

    fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}

#[tokio::test]
async fn test_delete_targets_instance_url_and_returns_instance() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/deliveries/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let delivery = Delivery::from_object(object_from(json!({"id": 7, "status": "scheduled"})));

    let deleted = ops::delete(&client, delivery).await.unwrap();

    // Server-side deletion does not clear local attributes.
    assert_eq!(deleted.id(), Some(7_u64.into()));
    assert_eq!(deleted.object().get_str("status"), Some("scheduled"));
}

#[tokio::test]
async fn test_delete_transient_instance_fails_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let delivery = Delivery::from_object(Object::new());
    let error = ops::delete(&client, delivery).await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidRequest { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Custom Sub-Paths
// ============================================================================

#[tokio::test]
async fn test_track_fetches_subpath_and_returns_whole_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/4/track"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracking_number": "tassi_TRK_CFE667F2DB8E9578",
            "events": [
                {"code": "pickup", "city": "Cotonou"},
                {"code": "delivered", "city": "Porto-Novo"}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::from_object(object_from(json!({"id": 4})));

    let tracking = package.track(&client).await.unwrap();
    let events = tracking.get_array("events").unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].as_object().unwrap().get_str("code"), Some("delivered"));
}

#[tokio::test]
async fn test_shipping_label_targets_nested_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/packages/4/shipping_labels/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipping_label": {"id": 12, "format": "pdf"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let package = Package::from_object(object_from(json!({"id": 4})));

    // Sub-resource calls return the whole payload, envelope included.
    let label = package.shipping_label(&client, 12_u64.into()).await.unwrap();
    assert_eq!(
        label.get_object("shipping_label").unwrap().get_i64("id"),
        Some(12)
    );
}

#[tokio::test]
async fn test_wallet_history_forwards_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marketplaces/12/wallet_history"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wallet_movements": [],
            "meta": {"current_page": 1, "per_page": 25, "total_count": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let marketplace = Marketplace::from_object(object_from(json!({"id": 12})));

    let history = marketplace
        .wallet_history(&client, Some(json!({"per_page": 25})))
        .await
        .unwrap();

    assert_eq!(history.get_array("wallet_movements").unwrap().len(), 0);
    assert_eq!(
        history.get_object("meta").unwrap().get_i64("per_page"),
        Some(25)
    );
}

#[tokio::test]
async fn test_subpath_on_transient_instance_fails_without_network_call() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    let package = Package::new();
    let error = package.track(&client).await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidRequest { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
