//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_ctf_contracts, generate_bindings, run_example},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_BINDINGS_FILE, DEFAULT_DEPLOYMENTS_FILE, DEFAULT_RPC,
        DEV_MNEMONIC, LOCAL_NETWORK,
    },
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Scripts for deploying & initializing the CTF challenge contracts
#[derive(Parser)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC)]
    pub rpc_url: String,

    /// Name of the target network, used to key deployment records
    #[arg(short, long, default_value = LOCAL_NETWORK)]
    pub network: String,

    /// Path of the deployments record file
    #[arg(long, default_value = DEFAULT_DEPLOYMENTS_FILE)]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the CTF contract sequence and grant mint permissions
    Deploy(DeployArgs),
    /// Regenerate the TypeScript bindings from the deployments record
    GenerateBindings(GenerateBindingsArgs),
    /// Run the example interaction against the deployed Challenge 1
    Example(ExampleArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        client: RpcProvider,
        network: &str,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                info!("Deploying CTF contracts...");
                deploy_ctf_contracts(args, network, deployments_path, client).await
            }
            Command::GenerateBindings(args) => {
                info!("Regenerating bindings...");
                generate_bindings(args, network, deployments_path, client).await
            }
            Command::Example(args) => run_example(args, network, deployments_path, client).await,
        }
    }
}

/// Deploy the CTF contracts
#[derive(Args)]
pub struct DeployArgs {
    /// Only run sequences carrying one of these tags; empty runs everything
    #[arg(short, long)]
    pub tags: Vec<String>,

    /// Mnemonic from which the Challenge 4 minter account is derived
    #[arg(long, env = "MNEMONIC", default_value = DEV_MNEMONIC)]
    pub mnemonic: String,

    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Path of the generated TypeScript bindings file
    #[arg(long, default_value = DEFAULT_BINDINGS_FILE)]
    pub bindings_path: String,
}

/// Regenerate the TypeScript bindings
#[derive(Args)]
pub struct GenerateBindingsArgs {
    /// Path of the generated TypeScript bindings file
    #[arg(long, default_value = DEFAULT_BINDINGS_FILE)]
    pub bindings_path: String,
}

/// Run the example Challenge 1 interaction
#[derive(Args)]
pub struct ExampleArgs {
    /// Team name to register
    #[arg(long, default_value = "Bob")]
    pub team_name: String,

    /// Team size to register
    #[arg(long, default_value_t = 1)]
    pub team_size: u8,
}
