use reqwest::StatusCode;
use serde_json::Value;

use travelstore_catalog::seed;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = travelstore_api::app::build_app(seed::catalog());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let res = self.get(path).await;
        let status = res.status();
        let body = res.json().await.unwrap();
        (status, body)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn result_names(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_ok_and_carries_request_id() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);

    let id = res.headers().get("x-request-id").expect("missing x-request-id");
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn default_listing_returns_whole_catalog_by_name() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 6);
    assert_eq!(body["count_label"], "6 products found");
    assert_eq!(body["state"]["category"], "all");
    assert_eq!(body["state"]["sort"], "name");
    assert!(body["empty_state"].is_null());
    assert_eq!(result_names(&body)[0], "Compression Socks");
}

#[tokio::test]
async fn travel_query_sorted_by_price() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .get_json("/api/products?query=TRAVEL&category=all&sort=price-ascending")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result_names(&body),
        vec!["Travel Pillow", "Travel Adapter", "Travel Backpack"]
    );
    assert_eq!(body["results"][0]["price_display"], "$19.99");
}

#[tokio::test]
async fn category_and_legacy_sort_names_are_accepted() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .get_json("/api/products?category=electronics&sort=rating")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["sort"], "rating-descending");
    assert_eq!(result_names(&body), vec!["Portable Charger", "Travel Adapter"]);
}

#[tokio::test]
async fn no_match_returns_empty_state() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/products?query=zzz-no-match").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["count_label"], "0 products found");
    assert_eq!(body["empty_state"]["title"], "No products found");
}

#[tokio::test]
async fn invalid_selectors_are_rejected() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/products?category=shoes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_category");

    let (status, body) = srv.get_json("/api/products?sort=newest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_sort");
}

#[tokio::test]
async fn product_lookup_by_id() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/products/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Travel Pillow");
    assert_eq!(body["category"], "comfort");

    let (status, body) = srv.get_json("/api/products/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "product not found");

    let (status, body) = srv.get_json("/api/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn selector_options_are_listed() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/products/options").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 5);
    assert_eq!(body["sorts"][1]["label"], "Price: Low to High");
}

#[tokio::test]
async fn home_and_footer_view_models() {
    let srv = TestServer::spawn().await;

    let (status, home) = srv.get_json("/api/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(home["hero"]["title"], "Your Journey Starts Here");
    assert_eq!(home["featured"]["products"].as_array().unwrap().len(), 3);
    assert_eq!(home["featured"]["products"][0]["name"], "Travel Backpack");

    let (status, footer) = srv.get_json("/api/footer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(footer["brand"], "TravelStore");
    assert!(
        footer["copyright"]
            .as_str()
            .unwrap()
            .ends_with("TravelStore. All rights reserved.")
    );
}

#[tokio::test]
async fn unknown_routes_get_json_404() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get_json("/api/cart").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
