//! The immutable context threaded through a deployment run

use std::path::PathBuf;

use alloy::primitives::Address;

/// All run-wide configuration for a deployment, resolved once up front.
///
/// The orchestrator and the step builders only ever read from this value;
/// nothing below `commands` touches the environment or the CLI directly.
pub struct DeployContext {
    /// The deployer account, used as constructor argument and owner
    pub deployer: Address,
    /// The name of the target network, used to key deployment records
    /// and to gate the localhost-only registry enable
    pub network: String,
    /// The chain id of the target network
    pub chain_id: u64,
    /// The mnemonic from which the Challenge 4 minter account is derived
    pub mnemonic: String,
    /// Directory holding the compiled contract artifacts
    pub artifacts_dir: PathBuf,
}

impl DeployContext {
    /// Whether the target network is the local development network
    pub fn is_local(&self) -> bool {
        self.network == crate::constants::LOCAL_NETWORK
    }
}
