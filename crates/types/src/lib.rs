/// Shared types for the amicoin meme voting service
///
/// This crate provides the record types, chain registry and wallet session
/// model used by the server and by any client that talks to its HTTP API.

pub mod chain;
pub mod constants;
pub mod meme;
pub mod vote;
pub mod wallet;

// Re-export all public types
pub use chain::*;
pub use constants::*;
pub use meme::*;
pub use vote::*;
pub use wallet::*;
