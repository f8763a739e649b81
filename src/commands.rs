//! Implementation of the marketplace deploy script

use std::sync::Arc;

use ethers::{
    abi::{Address, Contract},
    contract::ContractFactory,
    providers::Middleware,
    types::Bytes,
};
use tracing::debug;

use crate::{
    constants::{MARKETPLACE_ABI, MARKETPLACE_BYTECODE, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
};

/// Constructs a [`ContractFactory`] for the NoteMarketplace contract
/// from its compiled ABI & bytecode artifacts
pub fn marketplace_factory<M: Middleware>(
    client: Arc<M>,
) -> Result<ContractFactory<M>, ScriptError> {
    let abi: Contract = serde_json::from_str(MARKETPLACE_ABI)
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = Bytes::from(
        hex::decode(MARKETPLACE_BYTECODE.trim())
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?,
    );

    Ok(ContractFactory::new(abi, bytecode, client))
}

/// Deploys the NoteMarketplace contract, logging the deployed address.
///
/// The deployment transaction is sent exactly once; there is no retry on
/// failure, and nothing is written to stdout until the transaction settles.
pub async fn deploy_marketplace(client: Arc<impl Middleware>) -> Result<Address, ScriptError> {
    let factory = marketplace_factory(client)?;

    // The marketplace constructor takes no arguments
    let marketplace = factory
        .deploy(())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .send()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let marketplace_address = marketplace.address();
    debug!("deployment transaction settled");

    println!("Contract deployed to address: {:#x}", marketplace_address);

    Ok(marketplace_address)
}
