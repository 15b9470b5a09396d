//! Vote records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single (voter, meme) association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: i64,
    pub voter_wallet_address: String,
    pub meme_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVote {
    pub voter_wallet_address: String,
    pub meme_id: i64,
}
