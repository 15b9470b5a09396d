//! Core trait abstractions (Ports in Hexagonal Architecture)

use amicoin_types::{Meme, MemeWithVotes, NewMeme, NewVote, Vote};
use async_trait::async_trait;

use super::error::ArenaResult;
use super::types::*;

/// Storage port - the `memes` and `votes` tables
#[async_trait]
pub trait MemeStore: Send + Sync {
    /// Insert a meme and return it with its assigned id
    async fn insert_meme(&self, meme: &NewMeme) -> ArenaResult<Meme>;

    /// Get a meme by id
    async fn get_meme(&self, id: i64) -> ArenaResult<Option<Meme>>;

    /// All memes with derived vote counts, ordered by id
    async fn memes_with_votes(&self) -> ArenaResult<Vec<MemeWithVotes>>;

    /// Append a vote
    async fn insert_vote(&self, vote: &NewVote) -> ArenaResult<Vote>;

    /// Number of votes a voter has cast for a meme
    async fn count_votes_by_voter(&self, voter: &str, meme_id: i64) -> ArenaResult<i64>;

    /// Health check
    async fn health_check(&self) -> ArenaResult<StorageHealth>;
}

/// Minting port - the external coin factory
#[async_trait]
pub trait CoinMinter: Send + Sync {
    async fn mint(&self, request: &MintRequest) -> ArenaResult<MintedCoin>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
