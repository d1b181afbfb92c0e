use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::errors::ScriptError;

/// Re-export of the alloy recommended filler stack
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// A provider that signs with the deployer key and talks to the RPC
/// endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Builds the provider used for every chain interaction in the scripts.
///
/// The deployer private key comes from the `PRIVATE_KEY` environment
/// variable; the RPC URL is passed in from the CLI.
pub async fn create_rpc_provider(rpc_url: &str) -> Result<RpcProvider, ScriptError> {
    let private_key = env::var("PRIVATE_KEY")
        .map_err(|_| ScriptError::ClientInitialization("PRIVATE_KEY is not set".to_string()))?;
    let private_key = B256::from_slice(
        &hex::decode(private_key.trim_start_matches("0x"))
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?,
    );

    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let wallet = EthereumWallet::from(signer);

    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
