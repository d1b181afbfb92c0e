//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error when creating the RPC client
    ClientInitialization(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error reading the deployments record file
    ReadDeployments(String),
    /// Error writing the deployments record file
    WriteDeployments(String),
    /// Error fetching the nonce of the deployer
    NonceFetching(String),
    /// Error fetching the network fee estimate
    FeeEstimation(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// A deployment transaction was included but its receipt carries
    /// no contract address
    MissingContractAddress(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error deriving an account from the configured mnemonic
    AccountDerivation(String),
    /// A contract expected in the deployments record is absent
    MissingDeployment(String),
    /// Error generating the TypeScript bindings file
    BindingsGeneration(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::NonceFetching(s) => {
                write!(f, "error fetching nonce for deployment: {}", s)
            }
            ScriptError::FeeEstimation(s) => write!(f, "error fetching fee estimate: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::MissingContractAddress(s) => {
                write!(f, "no contract address in receipt for {}", s)
            }
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::AccountDerivation(s) => write!(f, "error deriving account: {}", s),
            ScriptError::MissingDeployment(s) => {
                write!(f, "contract {} not found in deployments", s)
            }
            ScriptError::BindingsGeneration(s) => write!(f, "error generating bindings: {}", s),
        }
    }
}

impl Error for ScriptError {}
