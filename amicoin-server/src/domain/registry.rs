//! Meme registry: creation, lookup, random pairs and ranking

use crate::core::{ArenaError, ArenaResult, MemeStore};
use crate::domain::pairing::pick_distinct_pair;
use amicoin_types::{Meme, MemeSummary, NewMeme};
use std::sync::Arc;
use tracing::{debug, info};

pub struct MemeRegistry {
    store: Arc<dyn MemeStore>,
}

impl MemeRegistry {
    pub fn new(store: Arc<dyn MemeStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new meme
    pub async fn create(&self, meme: NewMeme) -> ArenaResult<Meme> {
        require("name", &meme.name)?;
        require("symbol", &meme.symbol)?;
        require("imageUrl", &meme.image_url)?;
        require("creatorAddress", &meme.creator_address)?;
        if let Some(coin_address) = &meme.coin_address {
            require("coinAddress", coin_address)?;
        }

        let created = self.store.insert_meme(&meme).await?;
        info!("Created meme {} ({})", created.id, created.symbol);
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> ArenaResult<Meme> {
        self.store
            .get_meme(id)
            .await?
            .ok_or_else(|| ArenaError::NotFound(format!("meme {}", id)))
    }

    /// Two distinct random memes with vote counts, or none when fewer than two exist
    pub async fn list_random_pair(&self) -> ArenaResult<Vec<MemeSummary>> {
        let mut memes = self.store.memes_with_votes().await?;

        let picked = pick_distinct_pair(memes.len(), &mut rand::thread_rng());
        let Some((first, second)) = picked else {
            debug!("Only {} memes available, no pair served", memes.len());
            return Ok(Vec::new());
        };

        let a = memes.swap_remove(first.max(second));
        let b = memes.swap_remove(first.min(second));
        let pair = if first > second { [a, b] } else { [b, a] };

        Ok(pair.into_iter().map(MemeSummary::from).collect())
    }

    /// All memes with vote counts, most votes first, ties in creation order
    pub async fn list_ranked(&self) -> ArenaResult<Vec<MemeSummary>> {
        let mut memes = self.store.memes_with_votes().await?;
        memes.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.meme.id.cmp(&b.meme.id)));
        Ok(memes.into_iter().map(MemeSummary::from).collect())
    }
}

fn require(field: &str, value: &str) -> ArenaResult<()> {
    if value.trim().is_empty() {
        return Err(ArenaError::validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;
    use amicoin_types::NewVote;

    fn new_meme(name: &str) -> NewMeme {
        NewMeme {
            name: name.to_string(),
            symbol: name.to_uppercase(),
            image_url: format!("http://x/{}.png", name),
            creator_address: "0xabc".to_string(),
            coin_address: None,
        }
    }

    async fn vote(store: &MemoryStore, meme_id: i64, times: usize) {
        for _ in 0..times {
            store
                .insert_vote(&NewVote { voter_wallet_address: "0xv".to_string(), meme_id })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let registry = MemeRegistry::new(Arc::new(MemoryStore::new()));

        let mut meme = new_meme("doge");
        meme.symbol = "   ".to_string();
        let err = registry.create(meme).await.unwrap_err();
        assert!(matches!(err, ArenaError::Validation(ref msg) if msg.contains("symbol")));

        let mut meme = new_meme("doge");
        meme.creator_address = String::new();
        assert!(registry.create(meme).await.is_err());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let registry = MemeRegistry::new(Arc::new(MemoryStore::new()));
        let created = registry.create(new_meme("doge")).await.unwrap();
        let fetched = registry.get(created.id).await.unwrap();

        assert_eq!(fetched.name, "doge");
        assert_eq!(fetched.symbol, "DOGE");
        assert_eq!(fetched.image_url, "http://x/doge.png");
        assert_eq!(fetched.creator_address, "0xabc");
        assert!(matches!(registry.get(404).await, Err(ArenaError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_random_pair_needs_two_memes() {
        let registry = MemeRegistry::new(Arc::new(MemoryStore::new()));
        assert!(registry.list_random_pair().await.unwrap().is_empty());

        registry.create(new_meme("a")).await.unwrap();
        assert!(registry.list_random_pair().await.unwrap().is_empty());

        registry.create(new_meme("b")).await.unwrap();
        registry.create(new_meme("c")).await.unwrap();
        for _ in 0..50 {
            let pair = registry.list_random_pair().await.unwrap();
            assert_eq!(pair.len(), 2);
            assert_ne!(pair[0].id, pair[1].id);
            assert!(pair.iter().all(|m| m.votes == 0));
        }
    }

    #[tokio::test]
    async fn test_ranked_by_votes_then_creation_order() {
        let store = Arc::new(MemoryStore::new());
        let registry = MemeRegistry::new(store.clone());
        let a = registry.create(new_meme("a")).await.unwrap();
        let b = registry.create(new_meme("b")).await.unwrap();
        let c = registry.create(new_meme("c")).await.unwrap();
        let d = registry.create(new_meme("d")).await.unwrap();

        vote(&store, c.id, 3).await;
        vote(&store, b.id, 1).await;
        vote(&store, d.id, 1).await;

        let ranked = registry.list_ranked().await.unwrap();
        let order: Vec<_> = ranked.iter().map(|m| (m.id, m.votes)).collect();
        assert_eq!(order, vec![(c.id, 3), (b.id, 1), (d.id, 1), (a.id, 0)]);
        assert!(ranked.windows(2).all(|w| w[0].votes >= w[1].votes));
    }
}
