//! Loading of compiled contract artifacts
//!
//! Artifacts are produced by the external Solidity build and consumed from
//! disk, one `<Name>.json` file per contract holding the ABI and the
//! creation bytecode.

use std::{fs, path::Path};

use json::JsonValue;

use crate::errors::ScriptError;

/// A compiled contract artifact
pub struct ContractArtifact {
    /// The contract ABI, kept as raw JSON since it is only ever persisted
    /// back out to the deployments record and the generated bindings
    pub abi: JsonValue,
    /// The hex-encoded creation bytecode
    pub bytecode: String,
}

impl ContractArtifact {
    /// Load the artifact for the named contract from the artifacts directory
    pub fn load(artifacts_dir: &Path, contract: &str) -> Result<Self, ScriptError> {
        let path = artifacts_dir.join(format!("{contract}.json"));
        let contents = fs::read_to_string(&path).map_err(|e| {
            ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e))
        })?;
        let parsed = json::parse(&contents)
            .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

        let abi = parsed["abi"].clone();
        if !abi.is_array() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{}: missing abi",
                path.display()
            )));
        }

        let bytecode = parsed["bytecode"]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ArtifactParsing(format!("{}: missing bytecode", path.display()))
            })?
            .to_string();

        Ok(ContractArtifact { abi, bytecode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_artifact(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(format!("{name}.json")), contents).unwrap();
    }

    #[test]
    fn test_load_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "Challenge1",
            r#"{"abi": [{"type": "constructor", "inputs": []}], "bytecode": "0x6080"}"#,
        );

        let artifact = ContractArtifact::load(dir.path(), "Challenge1").unwrap();
        assert_eq!(artifact.bytecode, "0x6080");
        assert_eq!(artifact.abi.len(), 1);
    }

    #[test]
    fn test_missing_artifact_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = ContractArtifact::load(dir.path(), "Challenge1");
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_artifact_without_abi() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Challenge1", r#"{"bytecode": "0x6080"}"#);

        let res = ContractArtifact::load(dir.path(), "Challenge1");
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }
}
