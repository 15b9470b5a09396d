//! API request and response types

use crate::core::ArenaError;
use amicoin_types::{Meme, MemeSummary, NewMeme, Vote};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Body of `POST /api/create-meme`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemeRequest {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub creator_address: String,
    #[serde(default)]
    pub coin_address: Option<String>,
}

impl From<CreateMemeRequest> for NewMeme {
    fn from(req: CreateMemeRequest) -> Self {
        NewMeme {
            name: req.name,
            symbol: req.symbol,
            image_url: req.image_url,
            creator_address: req.creator_address,
            coin_address: req.coin_address,
        }
    }
}

/// Body of `POST /api/mint-meme`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintMemeRequest {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    #[serde(default)]
    pub creator_address: Option<String>,
    #[serde(default)]
    pub chain_id: Option<u64>,
}

/// Body of `POST /api/vote`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub voter_wallet_address: String,
    pub voted_for_meme_id: i64,
}

/// Response for a newly created meme
#[derive(Debug, Serialize, Deserialize)]
pub struct MemeCreatedResponse {
    pub message: String,
    pub meme: Meme,
}

/// Response for single meme
#[derive(Debug, Serialize, Deserialize)]
pub struct MemeResponse {
    pub meme: Meme,
}

/// Response for pair and leaderboard listings
#[derive(Debug, Serialize, Deserialize)]
pub struct MemesResponse {
    pub memes: Vec<MemeSummary>,
}

/// Response for a recorded vote
#[derive(Debug, Serialize, Deserialize)]
pub struct VoteRecordedResponse {
    pub message: String,
    pub vote: Vote,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by handlers, rendered as `{"error": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Map a service error; server-side failures are logged and replaced by `fallback`
    pub fn from_arena(err: ArenaError, fallback: &str) -> Self {
        let status = match &err {
            ArenaError::Validation(_) => StatusCode::BAD_REQUEST,
            ArenaError::NotFound(_) => StatusCode::NOT_FOUND,
            ArenaError::DuplicateVote { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if err.is_client_error() {
            warn!("{}: {}", fallback, err);
            let message = match err {
                ArenaError::Validation(message) => message,
                other => other.to_string(),
            };
            Self { status, message }
        } else {
            error!("{}: {}", fallback, err);
            Self {
                status,
                message: fallback.to_string(),
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}
