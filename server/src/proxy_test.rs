use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{any, get, post};

use super::*;

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(
        upstream_url("http://api:8000/", "/api/sweets/search", Some("name=choc")),
        "http://api:8000/api/sweets/search?name=choc"
    );
    assert_eq!(upstream_url("http://api:8000", "/api/auth/me", None), "http://api:8000/api/auth/me");
    assert_eq!(upstream_url("http://api:8000", "/api/sweets/", Some("")), "http://api:8000/api/sweets/");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    assert!(!is_forwardable_header(&HeaderName::from_static("connection")));
    assert!(!is_forwardable_header(&HeaderName::from_static("host")));
    assert!(!is_forwardable_header(&HeaderName::from_static("content-length")));
    assert!(is_forwardable_header(&HeaderName::from_static("authorization")));
    assert!(is_forwardable_header(&HeaderName::from_static("content-type")));
}

#[test]
fn forwardable_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    let out = forwardable_headers(&headers);
    assert_eq!(out.get_all("set-cookie").iter().count(), 2);
    assert!(out.get("transfer-encoding").is_none());
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("too large".into()).status_code(), StatusCode::BAD_REQUEST);
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_router(upstream: String) -> Router {
    let config = ServerConfig { port: 0, api_upstream: upstream, proxy_timeout_secs: 5 };
    let state = ProxyState::new(&config).unwrap();
    Router::new().route("/api/{*rest}", any(forward)).with_state(state)
}

#[tokio::test]
async fn forward_relays_status_body_and_auth_header() {
    let upstream = Router::new()
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                    Some("Bearer tok") => (StatusCode::OK, r#"{"email":"a@b.c"}"#),
                    _ => (StatusCode::UNAUTHORIZED, r#"{"detail":"Not authenticated"}"#),
                }
            }),
        )
        .route("/api/sweets/search", get(|request: Request| async move { request.uri().query().unwrap_or_default().to_owned() }))
        .route("/api/inventory/purchase", post(|body: String| async move { (StatusCode::CREATED, body) }));
    let upstream = serve(upstream).await;
    let proxy = serve(proxy_router(upstream)).await;
    let client = reqwest::Client::new();

    let ok = client.get(format!("{proxy}/api/auth/me")).bearer_auth("tok").send().await.unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(ok.text().await.unwrap(), r#"{"email":"a@b.c"}"#);

    let denied = client.get(format!("{proxy}/api/auth/me")).send().await.unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
    assert!(denied.text().await.unwrap().contains("Not authenticated"));

    let search = client.get(format!("{proxy}/api/sweets/search?name=choc")).send().await.unwrap();
    assert_eq!(search.text().await.unwrap(), "name=choc");

    let created = client
        .post(format!("{proxy}/api/inventory/purchase"))
        .body(r#"{"sweet_id":1,"quantity":1}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(created.text().await.unwrap(), r#"{"sweet_id":1,"quantity":1}"#);
}

#[tokio::test]
async fn forward_reports_unreachable_upstream_as_bad_gateway() {
    // Bind and drop to obtain a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let proxy = serve(proxy_router(dead)).await;
    let reply = reqwest::get(format!("{proxy}/api/sweets/")).await.unwrap();
    assert_eq!(reply.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = reply.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("upstream unavailable"));
}
