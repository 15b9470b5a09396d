//! Domain services built on the core ports

pub mod launch;
pub mod ledger;
pub mod pairing;
pub mod registry;
pub mod wallet;

pub use launch::{LaunchRequest, MemeLauncher};
pub use ledger::VoteLedger;
pub use registry::MemeRegistry;
pub use wallet::WalletProvider;
