//! amicoin meme arena
//!
//! HTTP service that stores user-submitted memes, serves random head-to-head
//! pairs for voting, ranks memes by vote count and optionally mints an
//! on-chain coin for a meme before it is saved.

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use config::ServerConfig;
pub use core::{ArenaError, ArenaResult};
pub use infrastructure::ServiceContainer;
