//! Meme records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted named image with an optional on-chain coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meme {
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub creator_address: String,
    pub coin_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a creator; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeme {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub creator_address: String,
    #[serde(default)]
    pub coin_address: Option<String>,
}

/// A meme joined with its derived vote count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemeWithVotes {
    #[serde(flatten)]
    pub meme: Meme,
    pub votes: i64,
}

/// Shape returned by the pair and leaderboard endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemeSummary {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub votes: i64,
}

impl From<MemeWithVotes> for MemeSummary {
    fn from(entry: MemeWithVotes) -> Self {
        Self {
            id: entry.meme.id,
            name: entry.meme.name,
            image_url: entry.meme.image_url,
            votes: entry.votes,
        }
    }
}
