use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{
        abi::{IChallenge1, IChallenge4, INFTFlags},
        client::RpcProvider,
    },
};

/// Enable minting on the flag registry.
///
/// Only done on the local development network, where flags should be
/// claimable without further setup.
pub async fn send_enable_minting(
    registry: Address,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    let tx_request = TransactionRequest::default()
        .to(registry)
        .with_call(&INFTFlags::enableCall {})
        .with_value(U256::from(0));

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending enable transaction... {}", pending_tx.tx_hash());

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Enable tx done on block: {}", receipt.block_number.unwrap());

    Ok(receipt.transaction_hash)
}

/// Register an additional authorized minter on a challenge contract
pub async fn send_add_minter(
    challenge: Address,
    minter: Address,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    let tx_request = TransactionRequest::default()
        .to(challenge)
        .with_call(&IChallenge4::addMinterCall { minter })
        .with_value(U256::from(0));

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending add minter transaction... {}", pending_tx.tx_hash());

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Add minter tx done on block: {}",
        receipt.block_number.unwrap()
    );

    Ok(receipt.transaction_hash)
}

/// Grant every deployed challenge contract permission to mint flags,
/// in a single batch call on the registry
pub async fn send_grant_minters(
    registry: Address,
    minters: Vec<Address>,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    let tx_request = TransactionRequest::default()
        .to(registry)
        .with_call(&INFTFlags::addAllowedMinterMultipleCall { minters })
        .with_value(U256::from(0));

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Pending minter grant transaction... {}",
        pending_tx.tx_hash()
    );

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Minter grant tx done on block: {}",
        receipt.block_number.unwrap()
    );

    Ok(receipt.transaction_hash)
}

/// Register a team on the first challenge contract
pub async fn send_register_team(
    challenge: Address,
    name: String,
    size: u8,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    let tx_request = TransactionRequest::default()
        .to(challenge)
        .with_call(&IChallenge1::registerTeamCall { name, size })
        .with_value(U256::from(0));

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Pending team registration transaction... {}",
        pending_tx.tx_hash()
    );

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!(
        "Team registration tx done on block: {}",
        receipt.block_number.unwrap()
    );

    Ok(receipt.transaction_hash)
}
