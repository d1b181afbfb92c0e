//! The per-network deployments record
//!
//! Every deployed contract is persisted as `{address, abi}` under its name,
//! keyed by network, in a single JSON file. Records are keyed overwrites, so
//! re-running a deployment replaces them in place.

use std::{fs, path::PathBuf, str::FromStr};

use alloy::primitives::Address;
use json::JsonValue;

use crate::errors::ScriptError;

/// Read and write access to the deployments record file for one network
pub struct DeploymentStore {
    /// Path of the JSON record file
    file_path: String,
    /// The network whose records this store reads and writes
    network: String,
}

impl DeploymentStore {
    /// Build a store over the given record file and network
    pub fn new(file_path: &str, network: &str) -> Self {
        DeploymentStore {
            file_path: file_path.to_string(),
            network: network.to_string(),
        }
    }

    /// Record a deployed contract's address and ABI, replacing any
    /// previous record under the same name
    pub fn record(
        &self,
        contract: &str,
        address: Address,
        abi: JsonValue,
    ) -> Result<(), ScriptError> {
        // If the file doesn't exist yet, start from an empty record
        if !PathBuf::from(&self.file_path).exists() {
            fs::write(&self.file_path, "{}")
                .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;
        }

        let mut parsed_json = self.parse_file()?;

        let mut entry = JsonValue::new_object();
        entry["address"] = JsonValue::String(format!("{address:#x}"));
        entry["abi"] = abi;
        parsed_json[self.network.as_str()][contract] = entry;

        fs::write(&self.file_path, json::stringify_pretty(parsed_json, 4))
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

        Ok(())
    }

    /// Read a recorded contract address back
    pub fn read_address(&self, contract: &str) -> Result<Address, ScriptError> {
        let parsed_json = self.parse_file()?;

        let addr = parsed_json[self.network.as_str()][contract]["address"]
            .as_str()
            .ok_or_else(|| ScriptError::MissingDeployment(contract.to_string()))?;

        Address::from_str(addr).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }

    /// All `{address, abi}` records for this network, by contract name
    pub fn entries(&self) -> Result<Vec<(String, JsonValue)>, ScriptError> {
        let parsed_json = self.parse_file()?;

        Ok(parsed_json[self.network.as_str()]
            .entries()
            .map(|(name, entry)| (name.to_string(), entry.clone()))
            .collect())
    }

    /// Parse the record file's JSON content
    fn parse_file(&self) -> Result<JsonValue, ScriptError> {
        let contents = fs::read_to_string(&self.file_path)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

        json::parse(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store(dir: &tempfile::TempDir) -> DeploymentStore {
        let path = dir.path().join("deployments.json");
        DeploymentStore::new(path.to_str().unwrap(), "localhost")
    }

    #[test]
    fn test_record_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir);

        let address = Address::repeat_byte(0x42);
        store
            .record("Challenge1", address, JsonValue::new_array())
            .unwrap();

        assert_eq!(store.read_address("Challenge1").unwrap(), address);
    }

    #[test]
    fn test_rerecord_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir);

        store
            .record("Challenge1", Address::repeat_byte(0x11), JsonValue::new_array())
            .unwrap();
        store
            .record("Challenge1", Address::repeat_byte(0x22), JsonValue::new_array())
            .unwrap();

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            store.read_address("Challenge1").unwrap(),
            Address::repeat_byte(0x22)
        );
    }

    #[test]
    fn test_missing_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = make_store(&dir);

        store
            .record("Challenge1", Address::repeat_byte(0x11), JsonValue::new_array())
            .unwrap();

        let res = store.read_address("Challenge2");
        assert!(matches!(res, Err(ScriptError::MissingDeployment(_))));
    }

    #[test]
    fn test_networks_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let local = DeploymentStore::new(path.to_str().unwrap(), "localhost");
        let live = DeploymentStore::new(path.to_str().unwrap(), "optimism");

        local
            .record("NFTFlags", Address::repeat_byte(0x11), JsonValue::new_array())
            .unwrap();

        assert!(live.read_address("NFTFlags").is_err());
        assert_eq!(local.entries().unwrap().len(), 1);
    }
}
