//! The ordered CTF deployment plan
//!
//! The deployment order is data: a list of step descriptors, each naming a
//! contract, how its creation code is obtained, how its constructor
//! arguments are built from the addresses recorded so far, and what to do
//! right after it lands. The runner walks the list strictly in order, since
//! every later step's arguments depend on an earlier step's address.

use std::collections::BTreeMap;

use alloy::{
    primitives::{Address, B256},
    sol_types::SolValue,
};

use crate::{
    constants::{CHALLENGE8_BYTECODE_PREFIX, CHALLENGE8_GAS_LIMIT, REGISTRY_CONTRACT},
    context::DeployContext,
    errors::ScriptError,
};

/// How a step's creation code is obtained
pub enum DeployStrategy {
    /// Deploy from the contract's compiled artifact in the artifacts
    /// directory, recording its address and ABI
    Artifact,
    /// Deploy from a precomputed creation bytecode prefix, sent as a
    /// hand-built transaction with a pinned gas limit. No artifact exists
    /// for such a contract, so it is recorded with an empty ABI.
    RawBytecode {
        /// Hex-encoded creation bytecode, minus the trailing constructor
        /// argument word
        bytecode: &'static str,
        /// Gas limit for the creation transaction
        gas_limit: u128,
    },
}

/// An action run right after one step's contract lands, distinct from the
/// registry-wide minter grant that closes the whole run
#[derive(Debug, PartialEq, Eq)]
pub enum PostDeployAction {
    /// Call `enable()` on the freshly deployed registry so flags are
    /// claimable without further setup. Local development network only;
    /// on any other network the registry keeps its constructor state.
    EnableMintingOnLocalhost,
    /// Derive the account at the fixed minter derivation path from the
    /// configured mnemonic and authorize it as a minter on this contract
    AuthorizeDerivedMinter,
}

/// Builder of a step's ABI-encoded constructor arguments, given the run
/// context and the addresses recorded so far
pub type ConstructorArgs =
    fn(&DeployContext, &DeployedAddresses) -> Result<Vec<u8>, ScriptError>;

/// One step of the deployment plan
pub struct DeployStep {
    /// Name of the contract, as keyed in the artifacts directory and the
    /// deployments record
    pub contract: &'static str,
    /// How the creation code is obtained
    pub strategy: DeployStrategy,
    /// Constructor argument builder
    pub constructor_args: ConstructorArgs,
    /// Optional action run right after this contract lands
    pub after_deploy: Option<PostDeployAction>,
}

/// The addresses collected while a plan runs
#[derive(Default)]
pub struct DeployedAddresses(BTreeMap<&'static str, Address>);

impl DeployedAddresses {
    /// Record a deployed contract's address
    pub fn insert(&mut self, contract: &'static str, address: Address) {
        self.0.insert(contract, address);
    }

    /// Look up an address deployed by an earlier step
    pub fn get(&self, contract: &str) -> Result<Address, ScriptError> {
        self.0
            .get(contract)
            .copied()
            .ok_or_else(|| ScriptError::MissingDeployment(contract.to_string()))
    }
}

/// The challenge contracts granted mint permission on the registry at the
/// end of the run. Challenge 10 has no contract of its own (its logic lives
/// in the registry) and must never appear here.
pub const GRANTED_CHALLENGES: [&str; 11] = [
    "Challenge1",
    "Challenge2",
    "Challenge3",
    "Challenge4",
    "Challenge5",
    "Challenge6",
    "Challenge7",
    "Challenge8",
    "Challenge9",
    "Challenge11",
    "Challenge12",
];

/// The full CTF deployment sequence, in required order
pub fn ctf_plan() -> Vec<DeployStep> {
    vec![
        DeployStep {
            contract: REGISTRY_CONTRACT,
            strategy: DeployStrategy::Artifact,
            constructor_args: deployer_args,
            after_deploy: Some(PostDeployAction::EnableMintingOnLocalhost),
        },
        DeployStep {
            contract: "Challenge1",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge2",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge3",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge4",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: Some(PostDeployAction::AuthorizeDerivedMinter),
        },
        DeployStep {
            contract: "Challenge5",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge6",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge7Delegate",
            strategy: DeployStrategy::Artifact,
            constructor_args: deployer_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge7",
            strategy: DeployStrategy::Artifact,
            constructor_args: challenge7_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge8",
            strategy: DeployStrategy::RawBytecode {
                bytecode: CHALLENGE8_BYTECODE_PREFIX,
                gas_limit: CHALLENGE8_GAS_LIMIT,
            },
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge9",
            strategy: DeployStrategy::Artifact,
            constructor_args: challenge9_args,
            after_deploy: None,
        },
        // Challenge 10 has nothing to deploy, its logic is in the registry
        DeployStep {
            contract: "Challenge11",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
        DeployStep {
            contract: "Challenge12",
            strategy: DeployStrategy::Artifact,
            constructor_args: registry_args,
            after_deploy: None,
        },
    ]
}

/// Constructor arguments for contracts owned by the deployer
fn deployer_args(
    ctx: &DeployContext,
    _deployed: &DeployedAddresses,
) -> Result<Vec<u8>, ScriptError> {
    Ok(ctx.deployer.abi_encode())
}

/// Constructor arguments for challenges taking only the registry address
fn registry_args(
    _ctx: &DeployContext,
    deployed: &DeployedAddresses,
) -> Result<Vec<u8>, ScriptError> {
    Ok(deployed.get(REGISTRY_CONTRACT)?.abi_encode())
}

/// Challenge 7 takes the registry, its delegate, and the deployer
fn challenge7_args(
    ctx: &DeployContext,
    deployed: &DeployedAddresses,
) -> Result<Vec<u8>, ScriptError> {
    let registry = deployed.get(REGISTRY_CONTRACT)?;
    let delegate = deployed.get("Challenge7Delegate")?;
    Ok((registry, delegate, ctx.deployer).abi_encode_params())
}

/// Challenge 9 takes the registry and a fresh random 32-byte value
fn challenge9_args(
    _ctx: &DeployContext,
    deployed: &DeployedAddresses,
) -> Result<Vec<u8>, ScriptError> {
    let registry = deployed.get(REGISTRY_CONTRACT)?;
    Ok((registry, B256::random()).abi_encode_params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEV_MNEMONIC;

    fn make_context() -> DeployContext {
        DeployContext {
            deployer: Address::repeat_byte(0xaa),
            network: "localhost".to_string(),
            chain_id: 31337,
            mnemonic: DEV_MNEMONIC.to_string(),
            artifacts_dir: "artifacts".into(),
        }
    }

    #[test]
    fn test_plan_starts_with_the_registry() {
        let plan = ctf_plan();
        assert_eq!(plan[0].contract, REGISTRY_CONTRACT);
        assert_eq!(
            plan[0].after_deploy,
            Some(PostDeployAction::EnableMintingOnLocalhost)
        );
    }

    #[test]
    fn test_plan_never_deploys_challenge10() {
        assert!(ctf_plan().iter().all(|step| step.contract != "Challenge10"));
        assert!(!GRANTED_CHALLENGES.contains(&"Challenge10"));
    }

    #[test]
    fn test_grant_list_covers_exactly_the_challenges() {
        assert_eq!(GRANTED_CHALLENGES.len(), 11);
        assert!(!GRANTED_CHALLENGES.contains(&REGISTRY_CONTRACT));
        assert!(!GRANTED_CHALLENGES.contains(&"Challenge7Delegate"));

        // Every granted challenge is deployed by some step of the plan
        let plan = ctf_plan();
        for name in GRANTED_CHALLENGES {
            assert!(plan.iter().any(|step| step.contract == name));
        }
    }

    #[test]
    fn test_delegate_is_deployed_before_challenge7() {
        let plan = ctf_plan();
        let delegate = plan
            .iter()
            .position(|s| s.contract == "Challenge7Delegate")
            .unwrap();
        let challenge7 = plan.iter().position(|s| s.contract == "Challenge7").unwrap();
        assert!(delegate < challenge7);
    }

    #[test]
    fn test_challenge4_authorizes_the_derived_minter() {
        let plan = ctf_plan();
        let step = plan.iter().find(|s| s.contract == "Challenge4").unwrap();
        assert_eq!(
            step.after_deploy,
            Some(PostDeployAction::AuthorizeDerivedMinter)
        );
    }

    #[test]
    fn test_challenge8_uses_the_raw_bytecode_strategy() {
        let plan = ctf_plan();
        let step = plan.iter().find(|s| s.contract == "Challenge8").unwrap();
        assert!(matches!(
            step.strategy,
            DeployStrategy::RawBytecode {
                gas_limit: 200_000,
                ..
            }
        ));
    }

    #[test]
    fn test_registry_args_require_the_registry() {
        let ctx = make_context();
        let deployed = DeployedAddresses::default();
        assert!(matches!(
            registry_args(&ctx, &deployed),
            Err(ScriptError::MissingDeployment(_))
        ));
    }

    #[test]
    fn test_challenge7_args_encoding() {
        let ctx = make_context();
        let mut deployed = DeployedAddresses::default();
        deployed.insert(REGISTRY_CONTRACT, Address::repeat_byte(0x11));
        deployed.insert("Challenge7Delegate", Address::repeat_byte(0x22));

        let args = challenge7_args(&ctx, &deployed).unwrap();
        // Three address words
        assert_eq!(args.len(), 96);
        assert_eq!(&args[12..32], Address::repeat_byte(0x11).as_slice());
        assert_eq!(&args[44..64], Address::repeat_byte(0x22).as_slice());
        assert_eq!(&args[76..96], ctx.deployer.as_slice());
    }

    #[test]
    fn test_challenge9_args_are_salted() {
        let ctx = make_context();
        let mut deployed = DeployedAddresses::default();
        deployed.insert(REGISTRY_CONTRACT, Address::repeat_byte(0x11));

        let first = challenge9_args(&ctx, &deployed).unwrap();
        let second = challenge9_args(&ctx, &deployed).unwrap();
        assert_eq!(first.len(), 64);
        // Same registry word, fresh random word
        assert_eq!(first[..32], second[..32]);
        assert_ne!(first[32..], second[32..]);
    }
}
