//! Derivation of the auxiliary accounts used at deploy time

use alloy::{
    primitives::Address,
    signers::local::{coins_bip39::English, MnemonicBuilder},
};

use crate::{constants::CHALLENGE4_MINTER_DERIVATION_PATH, errors::ScriptError};

/// Derive the account pre-authorized as a minter on Challenge 4.
///
/// The derivation path is fixed, so the same mnemonic always yields the
/// same address.
pub fn derive_challenge4_minter(mnemonic: &str) -> Result<Address, ScriptError> {
    let wallet = MnemonicBuilder::<English>::default()
        .phrase(mnemonic)
        .derivation_path(CHALLENGE4_MINTER_DERIVATION_PATH)
        .map_err(|e| ScriptError::AccountDerivation(e.to_string()))?
        .build()
        .map_err(|e| ScriptError::AccountDerivation(e.to_string()))?;

    Ok(wallet.address())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::constants::DEV_MNEMONIC;

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_challenge4_minter(DEV_MNEMONIC).unwrap();
        let second = derive_challenge4_minter(DEV_MNEMONIC).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derived_account_is_not_the_deployer() {
        // Account 0 of the dev mnemonic, the default local deployer
        let account0 =
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap();

        let minter = derive_challenge4_minter(DEV_MNEMONIC).unwrap();
        assert_ne!(minter, account0);
    }

    #[test]
    fn test_invalid_mnemonic_is_rejected() {
        let res = derive_challenge4_minter("not a valid mnemonic");
        assert!(matches!(res, Err(ScriptError::AccountDerivation(_))));
    }
}
