use clap::Parser;
use ctf_scripts::{cli::Cli, errors::ScriptError, tx::client::create_rpc_provider};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli {
        rpc_url,
        network,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    // Build our RPC client with signer
    let client = create_rpc_provider(&rpc_url).await?;

    command.run(client, &network, &deployments_path).await
}
