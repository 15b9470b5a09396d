//! Vote ledger

use crate::core::{ArenaError, ArenaResult, MemeStore, VotePolicy};
use amicoin_types::{NewVote, Vote};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct VoteLedger {
    store: Arc<dyn MemeStore>,
    policy: VotePolicy,
}

impl VoteLedger {
    pub fn new(store: Arc<dyn MemeStore>, policy: VotePolicy) -> Self {
        Self { store, policy }
    }

    /// Append a vote. The meme id is not checked against existing memes.
    pub async fn record(&self, voter_wallet_address: &str, meme_id: i64) -> ArenaResult<Vote> {
        if voter_wallet_address.trim().is_empty() {
            return Err(ArenaError::validation("voterWalletAddress is required"));
        }

        // Read-then-insert without a transaction; concurrent duplicates can slip through
        if self.policy == VotePolicy::OncePerMeme
            && self.store.count_votes_by_voter(voter_wallet_address, meme_id).await? > 0
        {
            warn!("Rejected repeat vote from {} for meme {}", voter_wallet_address, meme_id);
            return Err(ArenaError::DuplicateVote {
                voter: voter_wallet_address.to_string(),
                meme_id,
            });
        }

        let vote = self
            .store
            .insert_vote(&NewVote {
                voter_wallet_address: voter_wallet_address.to_string(),
                meme_id,
            })
            .await?;

        debug!("Recorded vote {} for meme {}", vote.id, meme_id);
        Ok(vote)
    }
}
