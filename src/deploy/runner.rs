//! The generic sequential deployment runner
//!
//! Walks a deployment plan step by step: build constructor arguments,
//! deploy per the step's strategy, persist the record, then run the
//! step's post-deploy action. Any failure aborts the rest of the plan.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use json::JsonValue;
use tracing::info;

use crate::{
    accounts,
    artifacts::ContractArtifact,
    context::DeployContext,
    deploy::{
        plan::{DeployStep, DeployStrategy, DeployedAddresses, PostDeployAction},
        raw,
    },
    deployments::DeploymentStore,
    errors::ScriptError,
    tx::{client::RpcProvider, sender},
};

/// Run a deployment plan to completion, returning the addresses it produced
pub async fn run_plan(
    plan: Vec<DeployStep>,
    ctx: &DeployContext,
    store: &DeploymentStore,
    client: RpcProvider,
) -> Result<DeployedAddresses, ScriptError> {
    let mut deployed = DeployedAddresses::default();

    for step in plan {
        let args = (step.constructor_args)(ctx, &deployed)?;

        let address = match step.strategy {
            DeployStrategy::Artifact => {
                deploy_from_artifact(step.contract, &args, ctx, store, client.clone()).await?
            }
            DeployStrategy::RawBytecode { bytecode, gas_limit } => {
                let payload = raw::creation_payload(bytecode, &args)?;
                let address =
                    raw::deploy_raw_bytecode(step.contract, payload, gas_limit, ctx, client.clone())
                        .await?;
                // No artifact exists for a raw deployment, record an empty ABI
                store.record(step.contract, address, JsonValue::new_array())?;
                address
            }
        };

        info!("🚩 {} deployed at {:#x}", step.contract, address);
        deployed.insert(step.contract, address);

        if let Some(action) = &step.after_deploy {
            run_post_deploy(action, address, ctx, client.clone()).await?;
        }
    }

    Ok(deployed)
}

/// Deploy one contract from its compiled artifact and record it
async fn deploy_from_artifact(
    contract: &str,
    args: &[u8],
    ctx: &DeployContext,
    store: &DeploymentStore,
    client: RpcProvider,
) -> Result<Address, ScriptError> {
    let artifact = ContractArtifact::load(&ctx.artifacts_dir, contract)?;
    let payload = raw::creation_payload(&artifact.bytecode, args)?;

    let tx_request = TransactionRequest::default()
        .with_deploy_code(payload)
        .with_value(U256::from(0));

    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!(
        "Pending deployment of {}... {}",
        contract,
        pending_tx.tx_hash()
    );

    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    let address = receipt
        .contract_address
        .ok_or_else(|| ScriptError::MissingContractAddress(contract.to_string()))?;

    store.record(contract, address, artifact.abi)?;

    Ok(address)
}

/// Run a step's post-deploy action against the freshly deployed contract
async fn run_post_deploy(
    action: &PostDeployAction,
    address: Address,
    ctx: &DeployContext,
    client: RpcProvider,
) -> Result<(), ScriptError> {
    match action {
        PostDeployAction::EnableMintingOnLocalhost => {
            if ctx.is_local() {
                sender::send_enable_minting(address, client).await?;
                info!("🔓 Minting enabled");
            }
        }
        PostDeployAction::AuthorizeDerivedMinter => {
            let minter = accounts::derive_challenge4_minter(&ctx.mnemonic)?;
            sender::send_add_minter(address, minter, client).await?;
            info!("Authorized derived minter {:#x}", minter);
        }
    }

    Ok(())
}
