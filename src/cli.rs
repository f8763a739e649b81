//! Definitions of CLI arguments for the deploy script

use clap::Parser;

/// Deploy the NoteMarketplace contract, logging the deployed address.
///
/// Both arguments may be supplied through the environment instead of
/// the command line, in which case the script is invoked with no
/// arguments at all.
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,
}
