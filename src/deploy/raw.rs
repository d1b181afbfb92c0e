//! Deployment from precomputed creation bytecode
//!
//! Challenge 8 has no compiled artifact: its creation code is a fixed
//! bytecode prefix with the registry address baked in as the trailing
//! constructor word. The transaction is built by hand with an explicit
//! nonce, fee estimate, and gas limit, and broadcast directly.

use alloy::{
    hex,
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{context::DeployContext, errors::ScriptError, tx::client::RpcProvider};

/// Concatenate creation bytecode with ABI-encoded constructor arguments
/// into the full creation payload
pub fn creation_payload(bytecode: &str, args: &[u8]) -> Result<Vec<u8>, ScriptError> {
    let mut payload = hex::decode(bytecode.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ContractDeployment(format!("invalid creation bytecode: {e}")))?;
    payload.extend_from_slice(args);

    Ok(payload)
}

/// Broadcast a hand-built contract-creation transaction and wait for its
/// inclusion, returning the created contract's address.
///
/// A receipt without a contract address aborts the run; continuing would
/// leave a hole in the minter grant list at the end of the sequence.
pub async fn deploy_raw_bytecode(
    contract: &str,
    payload: Vec<u8>,
    gas_limit: u128,
    ctx: &DeployContext,
    client: RpcProvider,
) -> Result<Address, ScriptError> {
    let nonce = client
        .get_transaction_count(ctx.deployer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;

    let fees = client
        .estimate_eip1559_fees(None)
        .await
        .map_err(|e| ScriptError::FeeEstimation(e.to_string()))?;

    let tx_request = TransactionRequest::default()
        .with_deploy_code(payload)
        .with_nonce(nonce)
        .with_gas_limit(gas_limit)
        .with_max_fee_per_gas(fees.max_fee_per_gas)
        .with_max_priority_fee_per_gas(fees.max_priority_fee_per_gas)
        .with_value(U256::from(0))
        .with_chain_id(ctx.chain_id);

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!(
        "Pending raw deployment of {}... {}",
        contract,
        pending_tx.tx_hash()
    );

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    receipt
        .contract_address
        .ok_or_else(|| ScriptError::MissingContractAddress(contract.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolValue;

    use super::*;
    use crate::constants::CHALLENGE8_BYTECODE_PREFIX;

    #[test]
    fn test_payload_embeds_the_registry_address() {
        let registry = Address::repeat_byte(0x77);
        let payload =
            creation_payload(CHALLENGE8_BYTECODE_PREFIX, &registry.abi_encode()).unwrap();

        let prefix_len = (CHALLENGE8_BYTECODE_PREFIX.len() - 2) / 2;
        assert_eq!(payload.len(), prefix_len + 32);

        // The trailing word is the registry address, left-padded with zeros
        let word = &payload[payload.len() - 32..];
        assert_eq!(&word[..12], [0u8; 12].as_slice());
        assert_eq!(Address::from_slice(&word[12..]), registry);
    }

    #[test]
    fn test_payload_preserves_the_bytecode_prefix() {
        let registry = Address::repeat_byte(0x77);
        let payload =
            creation_payload(CHALLENGE8_BYTECODE_PREFIX, &registry.abi_encode()).unwrap();

        let prefix = hex::decode(CHALLENGE8_BYTECODE_PREFIX.trim_start_matches("0x")).unwrap();
        assert_eq!(&payload[..prefix.len()], prefix.as_slice());
    }

    #[test]
    fn test_invalid_bytecode_is_rejected() {
        let res = creation_payload("0xnothex", &[]);
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }
}
