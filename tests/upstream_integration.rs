use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use sun_ecommerce_mcp::{
    client::{endpoints, ApiClient, ApiError, PathParams, Payload},
    config::ClientConfig,
    domain::{dispatcher::ToolDispatcher, registry::ToolRegistry},
};

#[derive(Clone, Default)]
struct Upstream {
    delete_attempts: Arc<AtomicUsize>,
}

async fn get_product(Path(id): Path<String>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer upstream-secret");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "invalid token"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({"data": {"id": id, "name": "Widget"}})),
    )
}

async fn list_products(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!({
        "data": [],
        "pagination": {"page": 1, "total": 0},
        "query": query.unwrap_or_default(),
    }))
}

async fn create_cart(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({"data": {"id": "c-1", "customerId": body["customerId"]}})),
    )
}

async fn delete_product(State(upstream): State<Upstream>) -> (StatusCode, Json<Value>) {
    upstream.delete_attempts.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "database unavailable"})),
    )
}

async fn spawn_upstream() -> (String, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/api/v1/products", get(list_products))
        .route(
            "/api/v1/products/{id}",
            get(get_product).delete(delete_product),
        )
        .route("/api/v1/carts", post(create_cart))
        .with_state(upstream.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock upstream");
    });

    (format!("http://{addr}"), upstream)
}

fn config(base_url: &str, retries: &str, token: Option<&str>) -> ClientConfig {
    let base_url = base_url.to_string();
    let retries = retries.to_string();
    let token = token.map(str::to_string);
    ClientConfig::from_lookup(&move |key: &str| match key {
        "SUN_ECOMMERCE_API_URL" => Some(base_url.clone()),
        "SUN_ECOMMERCE_API_RETRIES" => Some(retries.clone()),
        "SUN_ECOMMERCE_API_TOKEN" => token.clone(),
        "SUN_ECOMMERCE_ENABLE_LOGGING" => Some("false".to_string()),
        _ => None,
    })
    .expect("valid config")
}

fn dispatcher(config: ClientConfig) -> ToolDispatcher {
    let client = ApiClient::new(config).expect("client builds");
    let registry = ToolRegistry::new().expect("registry");
    ToolDispatcher::new(client, Arc::new(registry))
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object arguments")
}

#[tokio::test]
async fn get_product_sends_bearer_token_and_unwraps_data() {
    let (base_url, _) = spawn_upstream().await;
    let dispatcher = dispatcher(config(&base_url, "1", Some("upstream-secret")));

    let result = dispatcher
        .call("get_product", args(json!({"id": "p-1"})))
        .await;

    assert!(result.success, "{result:?}");
    assert_eq!(result.data, Some(json!({"id": "p-1", "name": "Widget"})));
}

#[tokio::test]
async fn upstream_error_message_is_surfaced() {
    let (base_url, _) = spawn_upstream().await;
    let dispatcher = dispatcher(config(&base_url, "1", None));

    let result = dispatcher
        .call("get_product", args(json!({"id": "p-1"})))
        .await;

    assert!(!result.success);
    let error = result.error.expect("error text");
    assert!(error.contains("401"), "{error}");
    assert!(error.contains("invalid token"), "{error}");
}

#[tokio::test]
async fn search_products_sends_defaults_as_query() {
    let (base_url, _) = spawn_upstream().await;
    let dispatcher = dispatcher(config(&base_url, "1", None));

    let result = dispatcher
        .call("search_products", args(json!({"search": "red shoes"})))
        .await;

    assert!(result.success);
    assert_eq!(result.pagination, Some(json!({"page": 1, "total": 0})));

    let client = ApiClient::new(config(&base_url, "1", None)).expect("client");
    let raw = client
        .call_endpoint(
            &endpoints::LIST_PRODUCTS,
            &PathParams::new(),
            Payload::Query(args(json!({"search": "red shoes"}))),
        )
        .await
        .expect("list products");
    assert_eq!(raw["query"], "search=red+shoes");
}

#[tokio::test]
async fn create_cart_posts_json_body() {
    let (base_url, _) = spawn_upstream().await;
    let dispatcher = dispatcher(config(&base_url, "1", None));

    let result = dispatcher
        .call("create_cart", args(json!({"customerId": "u-7"})))
        .await;

    assert!(result.success);
    assert_eq!(result.data, Some(json!({"id": "c-1", "customerId": "u-7"})));
    assert!(!result.next_steps.is_empty());
}

#[tokio::test]
async fn persistent_failures_are_retried_until_exhausted() {
    let (base_url, upstream) = spawn_upstream().await;
    let client = ApiClient::new(config(&base_url, "2", None)).expect("client");

    let err = client
        .call_endpoint(
            &endpoints::DELETE_PRODUCT,
            &PathParams::from([("id".to_string(), "p-1".to_string())]),
            Payload::None,
        )
        .await
        .expect_err("upstream always fails");

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(upstream.delete_attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unreachable_upstream_reports_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ApiClient::new(config(&format!("http://{addr}"), "1", None)).expect("client");
    let err = client.health_check().await.expect_err("nothing listens");

    assert!(matches!(err, ApiError::Network { .. }), "{err:?}");
}
