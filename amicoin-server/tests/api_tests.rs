//! API integration tests

use amicoin_server::adapters::storage::MemoryStore;
use amicoin_server::api::create_router;
use amicoin_server::config::{ApiConfig, ServerConfig};
use amicoin_server::core::VotePolicy;
use amicoin_server::ServiceContainer;
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Create a test API backed by the in-memory store
fn create_test_api(config: ServerConfig) -> Result<Router> {
    let api_config: ApiConfig = config.api.clone();
    let container = ServiceContainer::with_store(config, Arc::new(MemoryStore::new()))?;
    Ok(create_router(container.api_state(), &api_config))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

async fn create_meme(app: &Router, name: &str, symbol: &str, image_url: &str) -> Result<i64> {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/create-meme",
        Some(json!({
            "name": name,
            "symbol": symbol,
            "imageUrl": image_url,
            "creatorAddress": "0xabc",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Meme created successfully");
    Ok(body["meme"]["id"].as_i64().unwrap())
}

async fn vote(app: &Router, meme_id: i64) -> Result<(StatusCode, Value)> {
    send(
        app,
        Method::POST,
        "/api/vote",
        Some(json!({ "voterWalletAddress": "0xvoter", "votedForMemeId": meme_id })),
    )
    .await
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let (status, body) = send(&app, Method::GET, "/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");

    Ok(())
}

#[tokio::test]
async fn test_create_pair_and_vote_scenario() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let a = create_meme(&app, "Doge", "DOGE", "http://x/a.png").await?;
    let b = create_meme(&app, "Pepe", "PEPE", "http://x/b.png").await?;

    let (status, body) = send(&app, Method::GET, "/api/get-memes", None).await?;
    assert_eq!(status, StatusCode::OK);
    let memes = body["memes"].as_array().unwrap();
    assert_eq!(memes.len(), 2);
    let mut ids: Vec<i64> = memes.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![a, b]);
    assert!(memes.iter().all(|m| m["votes"] == 0));
    assert!(memes.iter().any(|m| m["imageUrl"] == "http://x/a.png"));

    let (status, body) = vote(&app, a).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vote recorded successfully");
    assert_eq!(body["vote"]["memeId"], a);
    assert_eq!(body["vote"]["voterWalletAddress"], "0xvoter");

    let (_, body) = send(&app, Method::GET, "/api/leaderboard", None).await?;
    let memes = body["memes"].as_array().unwrap();
    assert_eq!(memes[0]["id"], a);
    assert_eq!(memes[0]["votes"], 1);
    assert_eq!(memes[1]["id"], b);
    assert_eq!(memes[1]["votes"], 0);

    Ok(())
}

#[tokio::test]
async fn test_pair_empty_with_fewer_than_two_memes() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let (status, body) = send(&app, Method::GET, "/api/get-memes", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "memes": [] }));

    create_meme(&app, "Doge", "DOGE", "http://x/a.png").await?;
    let (_, body) = send(&app, Method::GET, "/api/get-memes", None).await?;
    assert_eq!(body, json!({ "memes": [] }));

    Ok(())
}

#[tokio::test]
async fn test_vote_for_missing_meme_succeeds() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let (status, body) = vote(&app, 424242).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vote"]["memeId"], 424242);

    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_bad_request() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-meme",
        Some(json!({ "name": "Doge", "imageUrl": "http://x/a.png", "creatorAddress": "0xabc" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-meme",
        Some(json!({
            "name": " ",
            "symbol": "DOGE",
            "imageUrl": "http://x/a.png",
            "creatorAddress": "0xabc",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");

    let missing_voter = json!({ "votedForMemeId": 1 });
    let (status, _) = send(&app, Method::POST, "/api/vote", Some(missing_voter)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_leaderboard_sorted_with_ties_in_creation_order() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let a = create_meme(&app, "A", "A", "http://x/a.png").await?;
    let b = create_meme(&app, "B", "B", "http://x/b.png").await?;
    let c = create_meme(&app, "C", "C", "http://x/c.png").await?;

    vote(&app, c).await?;
    vote(&app, c).await?;
    vote(&app, a).await?;
    vote(&app, b).await?;

    let (status, body) = send(&app, Method::GET, "/api/leaderboard", None).await?;
    assert_eq!(status, StatusCode::OK);

    let ranked: Vec<(i64, i64)> = body["memes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| (m["id"].as_i64().unwrap(), m["votes"].as_i64().unwrap()))
        .collect();
    assert_eq!(ranked, vec![(c, 2), (a, 1), (b, 1)]);

    Ok(())
}

#[tokio::test]
async fn test_get_meme_by_id() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;
    let id = create_meme(&app, "Doge", "DOGE", "http://x/a.png").await?;

    let (status, body) = send(&app, Method::GET, &format!("/api/memes/{}", id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meme"]["name"], "Doge");
    assert_eq!(body["meme"]["symbol"], "DOGE");
    assert_eq!(body["meme"]["imageUrl"], "http://x/a.png");
    assert_eq!(body["meme"]["creatorAddress"], "0xabc");
    assert!(body["meme"]["coinAddress"].is_null());

    let (status, body) = send(&app, Method::GET, "/api/memes/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::GET, "/api/memes/not-a-number", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_once_per_meme_policy_returns_conflict() -> Result<()> {
    let mut config = ServerConfig::default();
    config.voting.policy = VotePolicy::OncePerMeme;
    let app = create_test_api(config)?;
    let id = create_meme(&app, "Doge", "DOGE", "http://x/a.png").await?;

    let (status, _) = vote(&app, id).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = vote(&app, id).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already voted"));

    Ok(())
}

#[tokio::test]
async fn test_mint_meme_sets_coin_address() -> Result<()> {
    let app = create_test_api(ServerConfig::default())?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/mint-meme",
        Some(json!({
            "name": "Doge",
            "symbol": "DOGE",
            "imageUrl": "http://x/a.png",
            "creatorAddress": "0xabc",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let coin = body["meme"]["coinAddress"].as_str().unwrap();
    assert!(coin.starts_with("0x"));
    assert_eq!(coin.len(), 42);

    // Disconnected wallet
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/mint-meme",
        Some(json!({ "name": "Pepe", "symbol": "PEPE", "imageUrl": "http://x/b.png" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_mock_wallet_mints_without_client_address() -> Result<()> {
    let mut config = ServerConfig::default();
    config.wallet.mock_address = Some("0x1234567890".to_string());
    let app = create_test_api(config)?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/mint-meme",
        Some(json!({ "name": "Pepe", "symbol": "PEPE", "imageUrl": "http://x/b.png" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["meme"]["creatorAddress"], "0x1234567890");

    let (_, body) = send(&app, Method::GET, "/api/wallet/config", None).await?;
    assert_eq!(body["mock"], true);
    assert_eq!(body["appName"], "amicoinornot");
    assert_eq!(body["defaultChainId"], 7_777_777);
    assert_eq!(body["chains"][0]["name"], "Zora");

    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() -> Result<()> {
    let mut config = ServerConfig::default();
    config.api.max_request_size_mb = 1;
    let app = create_test_api(config)?;

    let image_url = format!("data:image/png;base64,{}", "A".repeat(2 * 1024 * 1024));
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/create-meme",
        Some(json!({
            "name": "Doge",
            "symbol": "DOGE",
            "imageUrl": image_url,
            "creatorAddress": "0xabc",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());

    let (_, body) = send(&app, Method::GET, "/api/leaderboard", None).await?;
    assert_eq!(body, json!({ "memes": [] }));

    Ok(())
}
