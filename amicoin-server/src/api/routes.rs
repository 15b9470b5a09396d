//! API route definitions

use super::{handlers::*, ApiState};
use axum::{
    routing::{get, post},
    Router,
};

/// Create meme-related routes
pub fn create_meme_routes() -> Router<ApiState> {
    Router::new()
        .route("/api/create-meme", post(create_meme))
        .route("/api/mint-meme", post(mint_meme))
        .route("/api/get-memes", get(get_meme_pair))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/memes/:id", get(get_meme))
}

/// Create voting routes
pub fn create_vote_routes() -> Router<ApiState> {
    Router::new().route("/api/vote", post(record_vote))
}

/// Create wallet routes
pub fn create_wallet_routes() -> Router<ApiState> {
    Router::new().route("/api/wallet/config", get(get_wallet_config))
}
