//! In-process store for development and tests

use crate::core::{ArenaResult, MemeStore, StorageHealth};
use amicoin_types::{Meme, MemeWithVotes, NewMeme, NewVote, Vote};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    memes: BTreeMap<i64, Meme>,
    votes: Vec<Vote>,
    next_meme_id: i64,
    next_vote_id: i64,
}

/// `MemeStore` backed by in-memory tables; ids start at 1 like BIGSERIAL
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemeStore for MemoryStore {
    async fn insert_meme(&self, meme: &NewMeme) -> ArenaResult<Meme> {
        let mut tables = self.tables.write().await;
        tables.next_meme_id += 1;

        let stored = Meme {
            id: tables.next_meme_id,
            name: meme.name.clone(),
            symbol: meme.symbol.clone(),
            image_url: meme.image_url.clone(),
            creator_address: meme.creator_address.clone(),
            coin_address: meme.coin_address.clone(),
            created_at: Utc::now(),
        };
        tables.memes.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn get_meme(&self, id: i64) -> ArenaResult<Option<Meme>> {
        Ok(self.tables.read().await.memes.get(&id).cloned())
    }

    async fn memes_with_votes(&self) -> ArenaResult<Vec<MemeWithVotes>> {
        let tables = self.tables.read().await;

        let mut counts: BTreeMap<i64, i64> = BTreeMap::new();
        for vote in &tables.votes {
            *counts.entry(vote.meme_id).or_default() += 1;
        }

        Ok(tables
            .memes
            .values()
            .map(|meme| MemeWithVotes {
                meme: meme.clone(),
                votes: counts.get(&meme.id).copied().unwrap_or(0),
            })
            .collect())
    }

    async fn insert_vote(&self, vote: &NewVote) -> ArenaResult<Vote> {
        let mut tables = self.tables.write().await;
        tables.next_vote_id += 1;

        let stored = Vote {
            id: tables.next_vote_id,
            voter_wallet_address: vote.voter_wallet_address.clone(),
            meme_id: vote.meme_id,
            created_at: Utc::now(),
        };
        tables.votes.push(stored.clone());

        Ok(stored)
    }

    async fn count_votes_by_voter(&self, voter: &str, meme_id: i64) -> ArenaResult<i64> {
        let tables = self.tables.read().await;
        let count = tables
            .votes
            .iter()
            .filter(|vote| vote.voter_wallet_address == voter && vote.meme_id == meme_id)
            .count();
        Ok(count as i64)
    }

    async fn health_check(&self) -> ArenaResult<StorageHealth> {
        Ok(StorageHealth {
            backend: "memory",
            healthy: true,
        })
    }
}
