//! Entrypoint for the NoteMarketplace deploy script

use clap::Parser;
use deploy_scripts::{
    cli::Cli, commands::deploy_marketplace, errors::ScriptError, utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli { priv_key, rpc_url } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;

    deploy_marketplace(client).await?;

    Ok(())
}
