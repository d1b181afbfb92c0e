use alloy::{primitives::Address, providers::Provider};

use crate::{
    errors::ScriptError,
    tx::{abi::IChallenge1, client::RpcProvider},
};

/// Read back the team registered on the first challenge by the given member
pub async fn get_team_info(
    challenge: Address,
    member: Address,
    client: RpcProvider,
) -> Result<(String, u8), ScriptError> {
    let contract = IChallenge1::new(challenge, client);

    let team = contract
        .teamInfo(member)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok((team.name, team.size))
}

/// Get the chain's current block height
pub async fn get_block_number(client: RpcProvider) -> Result<u64, ScriptError> {
    client
        .get_block_number()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
}
