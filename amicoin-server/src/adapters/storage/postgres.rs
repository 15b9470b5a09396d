//! PostgreSQL store with runtime queries (no compile-time checking)

use crate::config::DatabaseConfig;
use crate::core::{ArenaResult, MemeStore, StorageHealth};
use amicoin_types::{Meme, MemeWithVotes, NewMeme, NewVote, Vote};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use tracing::{debug, info};

const MEME_COLUMNS: &str = "id, name, symbol, image_url, creator_address, coin_address, created_at";

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub async fn connect(config: &DatabaseConfig) -> ArenaResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.postgres_url)
            .await?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Apply pending schema migrations
    pub async fn run_migrations(&self) -> ArenaResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}

fn meme_from_row(row: &PgRow) -> Result<Meme, sqlx::Error> {
    Ok(Meme {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        symbol: row.try_get("symbol")?,
        image_url: row.try_get("image_url")?,
        creator_address: row.try_get("creator_address")?,
        coin_address: row.try_get("coin_address")?,
        created_at: row.try_get("created_at")?,
    })
}

fn vote_from_row(row: &PgRow) -> Result<Vote, sqlx::Error> {
    Ok(Vote {
        id: row.try_get("id")?,
        voter_wallet_address: row.try_get("voter_wallet_address")?,
        meme_id: row.try_get("meme_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl MemeStore for PostgresStore {
    async fn insert_meme(&self, meme: &NewMeme) -> ArenaResult<Meme> {
        let query = format!(
            r#"
            INSERT INTO memes (name, symbol, image_url, creator_address, coin_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            MEME_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(&meme.name)
            .bind(&meme.symbol)
            .bind(&meme.image_url)
            .bind(&meme.creator_address)
            .bind(&meme.coin_address)
            .fetch_one(&self.pool)
            .await?;

        let meme = meme_from_row(&row)?;
        debug!("Inserted meme {}", meme.id);
        Ok(meme)
    }

    async fn get_meme(&self, id: i64) -> ArenaResult<Option<Meme>> {
        let query = format!("SELECT {} FROM memes WHERE id = $1", MEME_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(meme_from_row).transpose()?)
    }

    async fn memes_with_votes(&self) -> ArenaResult<Vec<MemeWithVotes>> {
        let query = r#"
            SELECT m.id, m.name, m.symbol, m.image_url, m.creator_address, m.coin_address,
                   m.created_at, COUNT(v.id) AS votes
            FROM memes m
            LEFT JOIN votes v ON v.meme_id = m.id
            GROUP BY m.id
            ORDER BY m.id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let mut memes = Vec::with_capacity(rows.len());
        for row in &rows {
            memes.push(MemeWithVotes {
                meme: meme_from_row(row)?,
                votes: row.try_get("votes")?,
            });
        }

        debug!("Loaded {} memes with vote counts", memes.len());
        Ok(memes)
    }

    async fn insert_vote(&self, vote: &NewVote) -> ArenaResult<Vote> {
        let query = r#"
            INSERT INTO votes (voter_wallet_address, meme_id)
            VALUES ($1, $2)
            RETURNING id, voter_wallet_address, meme_id, created_at
        "#;

        let row = sqlx::query(query)
            .bind(&vote.voter_wallet_address)
            .bind(vote.meme_id)
            .fetch_one(&self.pool)
            .await?;

        let vote = vote_from_row(&row)?;
        debug!("Inserted vote {} for meme {}", vote.id, vote.meme_id);
        Ok(vote)
    }

    async fn count_votes_by_voter(&self, voter: &str, meme_id: i64) -> ArenaResult<i64> {
        let query = "SELECT COUNT(*) FROM votes WHERE voter_wallet_address = $1 AND meme_id = $2";

        let count: i64 = sqlx::query_scalar(query)
            .bind(voter)
            .bind(meme_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> ArenaResult<StorageHealth> {
        let healthy = sqlx::query("SELECT 1").fetch_one(&self.pool).await.is_ok();
        Ok(StorageHealth {
            backend: "postgres",
            healthy,
        })
    }
}
