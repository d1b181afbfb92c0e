//! Generation of the TypeScript contract bindings
//!
//! Client code consumes deployments through a generated
//! `deployedContracts.ts` module. The file is rewritten from the
//! deployments record after every deploy run, and can be regenerated on
//! its own through the `generate-bindings` subcommand.

use std::fs;

use json::JsonValue;
use tracing::info;

use crate::{deployments::DeploymentStore, errors::ScriptError};

/// Header of the generated bindings file
const BINDINGS_HEADER: &str = "/**\n \
    * This file is autogenerated from the deployments record.\n \
    * Do not edit it manually, it is overwritten on every deploy.\n \
    */";

/// Regenerate the TypeScript bindings file from the deployments record.
///
/// The output is a single `deployedContracts` export keyed by chain id,
/// holding each recorded contract's address and ABI.
pub fn generate_ts_bindings(
    store: &DeploymentStore,
    chain_id: u64,
    out_path: &str,
) -> Result<(), ScriptError> {
    let mut contracts = JsonValue::new_object();
    for (name, entry) in store.entries()? {
        contracts[name.as_str()] = entry;
    }

    let chain_key = chain_id.to_string();
    let mut root = JsonValue::new_object();
    root[chain_key.as_str()] = contracts;

    let contents = format!(
        "{}\n\nconst deployedContracts = {} as const;\n\nexport default deployedContracts;\n",
        BINDINGS_HEADER,
        json::stringify_pretty(root, 2)
    );

    fs::write(out_path, contents).map_err(|e| ScriptError::BindingsGeneration(e.to_string()))?;
    info!("Generated bindings at {}", out_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    #[test]
    fn test_generated_bindings_cover_recorded_contracts() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("deployments.json");
        let store = DeploymentStore::new(store_path.to_str().unwrap(), "localhost");

        store
            .record("NFTFlags", Address::repeat_byte(0x11), JsonValue::new_array())
            .unwrap();
        store
            .record("Challenge1", Address::repeat_byte(0x22), JsonValue::new_array())
            .unwrap();

        let out_path = dir.path().join("deployedContracts.ts");
        generate_ts_bindings(&store, 31337, out_path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&out_path).unwrap();
        assert!(contents.contains("export default deployedContracts"));
        assert!(contents.contains("31337"));
        assert!(contents.contains("NFTFlags"));
        assert!(contents.contains("Challenge1"));
        assert!(contents.contains(&format!("{:#x}", Address::repeat_byte(0x22))));
    }

    #[test]
    fn test_bindings_regeneration_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join("deployments.json");
        let store = DeploymentStore::new(store_path.to_str().unwrap(), "localhost");

        let out_path = dir.path().join("deployedContracts.ts");
        store
            .record("NFTFlags", Address::repeat_byte(0x11), JsonValue::new_array())
            .unwrap();
        generate_ts_bindings(&store, 31337, out_path.to_str().unwrap()).unwrap();

        store
            .record("NFTFlags", Address::repeat_byte(0x33), JsonValue::new_array())
            .unwrap();
        generate_ts_bindings(&store, 31337, out_path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&out_path).unwrap();
        assert!(contents.contains(&format!("{:#x}", Address::repeat_byte(0x33))));
        assert!(!contents.contains(&format!("{:#x}", Address::repeat_byte(0x11))));
    }
}
