//! Adapters implementing the core ports

pub mod minter;
pub mod storage;
