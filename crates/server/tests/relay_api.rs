use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{routing::get, Router};
use configs::AppConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use uuid::Uuid;

use server::startup::{build_app, build_state};

/// Stand-in for the third-party APIs, bound on an ephemeral port.
async fn fake_upstream() -> anyhow::Result<String> {
    let app = Router::new()
        .route("/random", get(|| async { r#"{"_id":"q1","author":"Ada Lovelace","content":"Imagine."}"# }))
        .route(
            "/search",
            get(|| async { r#"[{"name":"Sports University","country":"Nowhere","domains":["sports.edu"]}]"# }),
        )
        .route("/docs", get(|| async { "<!doctype html><title>docs</title>" }))
        .route("/broken", get(|| async { "<html>not json</html>" }));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("fake upstream error: {}", e);
        }
    });
    Ok(format!("http://{}", addr))
}

/// A base URL nothing listens on.
async fn closed_port() -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

async fn app_with_upstream(quote: String, univ: String, countries: String) -> anyhow::Result<Router> {
    let mut cfg = AppConfig::default();
    cfg.storage.students_file = std::env::temp_dir()
        .join(format!("relay_api_{}.json", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    cfg.upstream.quote_url = quote;
    cfg.upstream.univ_url = univ;
    cfg.upstream.countries_url = countries;
    cfg.upstream.timeout_secs = Some(5);
    Ok(build_app(build_state(&cfg).await?))
}

async fn get_json(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let res = app.clone().oneshot(Request::builder().uri(uri).body(Body::empty())?).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn relays_upstream_responses() -> anyhow::Result<()> {
    let base = fake_upstream().await?;
    let app = app_with_upstream(format!("{base}/random"), format!("{base}/search"), format!("{base}/docs")).await?;

    let (status, quote) = get_json(&app, "/quote").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote, json!({"_id": "q1", "author": "Ada Lovelace", "content": "Imagine."}));

    let (status, univ) = get_json(&app, "/univ").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(univ[0]["country"], "Nowhere");
    assert_eq!(univ[0]["domains"], json!(["sports.edu"]));

    let (status, countries) = get_json(&app, "/countries").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(countries, json!(["<!doctype html><title>docs</title>"]));
    Ok(())
}

#[tokio::test]
async fn unparseable_upstream_is_bad_gateway() -> anyhow::Result<()> {
    let base = fake_upstream().await?;
    let app = app_with_upstream(format!("{base}/broken"), format!("{base}/broken"), format!("{base}/docs")).await?;

    let (status, body) = get_json(&app, "/quote").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "error in /quote"}));

    let (status, body) = get_json(&app, "/univ").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "error in /univ"}));
    Ok(())
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() -> anyhow::Result<()> {
    let base = closed_port().await?;
    let app = app_with_upstream(format!("{base}/q"), format!("{base}/u"), format!("{base}/c")).await?;

    let (status, body) = get_json(&app, "/countries").await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "error in /countries"}));
    Ok(())
}

#[tokio::test]
async fn relay_routes_never_touch_the_students_file() -> anyhow::Result<()> {
    let base = fake_upstream().await?;
    let mut cfg = AppConfig::default();
    let file = std::env::temp_dir().join(format!("relay_untouched_{}.json", Uuid::new_v4()));
    cfg.storage.students_file = file.to_string_lossy().into_owned();
    cfg.upstream.quote_url = format!("{base}/random");
    cfg.upstream.univ_url = format!("{base}/search");
    cfg.upstream.countries_url = format!("{base}/docs");
    let app = build_app(build_state(&cfg).await?);

    for uri in ["/quote", "/univ", "/countries"] {
        let (status, _) = get_json(&app, uri).await?;
        assert_eq!(status, StatusCode::OK);
    }
    assert!(!file.exists());
    Ok(())
}
