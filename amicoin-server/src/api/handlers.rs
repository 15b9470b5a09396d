//! API request handlers

use super::{responses::*, ApiState};
use crate::domain::{wallet::WalletDescriptor, LaunchRequest};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        // Oversized bodies keep their 413; every other malformed body is a 400
        let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            StatusCode::PAYLOAD_TOO_LARGE
        } else {
            StatusCode::BAD_REQUEST
        };
        ApiError {
            status,
            message: rejection.body_text(),
        }
    })
}

/// Create a meme from a fully specified record
pub async fn create_meme(
    State(state): State<ApiState>,
    payload: Result<Json<CreateMemeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemeCreatedResponse>), ApiError> {
    let request = json_body(payload)?;

    let meme = state
        .registry
        .create(request.into())
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to create meme"))?;

    Ok((
        StatusCode::CREATED,
        Json(MemeCreatedResponse {
            message: "Meme created successfully".to_string(),
            meme,
        }),
    ))
}

/// Mint a coin for the meme, then save it with the coin address
pub async fn mint_meme(
    State(state): State<ApiState>,
    payload: Result<Json<MintMemeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemeCreatedResponse>), ApiError> {
    let request = json_body(payload)?;

    let meme = state
        .launcher
        .launch(LaunchRequest {
            name: request.name,
            symbol: request.symbol,
            image_url: request.image_url,
            creator_address: request.creator_address,
            chain_id: request.chain_id,
        })
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to create meme"))?;

    Ok((
        StatusCode::CREATED,
        Json(MemeCreatedResponse {
            message: "Meme and coin created successfully".to_string(),
            meme,
        }),
    ))
}

/// Two random memes to vote between
pub async fn get_meme_pair(
    State(state): State<ApiState>,
) -> Result<Json<MemesResponse>, ApiError> {
    let memes = state
        .registry
        .list_random_pair()
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to fetch memes"))?;

    Ok(Json(MemesResponse { memes }))
}

pub async fn get_leaderboard(
    State(state): State<ApiState>,
) -> Result<Json<MemesResponse>, ApiError> {
    let memes = state
        .registry
        .list_ranked()
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to fetch ranked memes"))?;

    Ok(Json(MemesResponse { memes }))
}

pub async fn get_meme(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MemeResponse>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let meme = state
        .registry
        .get(id)
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to fetch meme"))?;

    Ok(Json(MemeResponse { meme }))
}

pub async fn record_vote(
    State(state): State<ApiState>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteRecordedResponse>, ApiError> {
    let request = json_body(payload)?;

    let vote = state
        .ledger
        .record(&request.voter_wallet_address, request.voted_for_meme_id)
        .await
        .map_err(|e| ApiError::from_arena(e, "Failed to record vote"))?;

    Ok(Json(VoteRecordedResponse {
        message: "Vote recorded successfully".to_string(),
        vote,
    }))
}

/// Public wallet settings for clients
pub async fn get_wallet_config(State(state): State<ApiState>) -> Json<WalletDescriptor> {
    Json(state.wallet.describe())
}
