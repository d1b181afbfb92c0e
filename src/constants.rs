//! Constants used in the deploy scripts

/// Default RPC endpoint, the local development node
pub const DEFAULT_RPC: &str = "http://localhost:8545";

/// The name of the local development network
///
/// Minting on the flag registry is enabled automatically on this network only.
pub const LOCAL_NETWORK: &str = "localhost";

/// The tag carried by the CTF deployment sequence
pub const CTF_TAG: &str = "CTF";

/// Default path of the per-network deployments record file
pub const DEFAULT_DEPLOYMENTS_FILE: &str = "deployments.json";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default path of the generated TypeScript bindings file
pub const DEFAULT_BINDINGS_FILE: &str = "deployedContracts.ts";

/// The name of the flag issuance registry contract
pub const REGISTRY_CONTRACT: &str = "NFTFlags";

/// The well-known development mnemonic used by local nodes
pub const DEV_MNEMONIC: &str =
    "test test test test test test test test test test test junk";

/// Derivation path of the account pre-authorized as a minter on Challenge 4
pub const CHALLENGE4_MINTER_DERIVATION_PATH: &str = "m/44'/60'/0'/0/12";

/// Gas limit for the hand-built Challenge 8 creation transaction
pub const CHALLENGE8_GAS_LIMIT: u128 = 200_000;

/// Creation bytecode of the Challenge 8 contract, minus its trailing
/// constructor argument (the registry address, appended as a 32-byte word)
pub const CHALLENGE8_BYTECODE_PREFIX: &str =
    "0x608060405234801561001057600080fd5b5060405161022c38038061022c83398101604081905261002f91610054565b600080546001600160a01b0319166001600160a01b0392909216919091179055610084565b60006020828403121561006657600080fd5b81516001600160a01b038116811461007d57600080fd5b9392505050565b610199806100936000396000f3fe608060405234801561001057600080fd5b50600436106100365760003560e01c80638fd628f01461003b578063d56d229d14610050575b600080fd5b61004e610049366004610133565b61007f565b005b600054610063906001600160a01b031681565b6040516001600160a01b03909116815260200160405180910390f35b6001600160a01b03811633146100cc5760405162461bcd60e51b815260206004820152600e60248201526d24b73b30b634b21036b4b73a32b960911b604482015260640160405180910390fd5b6000546040516340c10f1960e01b8152336004820152600860248201526001600160a01b03909116906340c10f1990604401600060405180830381600087803b15801561011857600080fd5b505af115801561012c573d6000803e3d6000fd5b5050505050565b60006020828403121561014557600080fd5b81356001600160a01b038116811461015c57600080fd5b939250505056fea26469706673582212202574d345d5aad3eba6e8e8374fb2634c736f99936431d51dd35a55f1503ef1c764736f6c63430008140033";
