use std::net::SocketAddr;

use configs::DocsConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, AppState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = routes::build_router(AppState::in_memory(), &DocsConfig::default(), false, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_concurrent_creates_are_all_stored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..32 {
        let c = c.clone();
        let url = format!("{}/users/{}", app.base_url, i);
        handles.push(tokio::spawn(async move {
            c.post(url).json(&json!({"name": format!("user-{i}"), "age": i})).send().await
        }));
    }
    for h in handles {
        let res = h.await??;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c.get(format!("{}/users", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 32);
    Ok(())
}

#[tokio::test]
async fn e2e_get_missing_user_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/users/404", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
