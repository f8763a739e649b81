//! Constants used in the deploy script

/// The ABI of the NoteMarketplace contract
///
/// Compiled from `contracts/NoteMarketplace.sol` with solc 0.8.17
pub const MARKETPLACE_ABI: &str = include_str!("../artifacts/NoteMarketplace.abi");

/// The bytecode of the NoteMarketplace contract
///
/// Compiled from `contracts/NoteMarketplace.sol` with solc 0.8.17
pub const MARKETPLACE_BYTECODE: &str = include_str!("../artifacts/NoteMarketplace.bin");

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 0;
