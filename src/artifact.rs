//! Input model — compiler artifact as emitted by solc/hardhat.
//!
//! Everything the merge engine consumes comes through these types: the ABI,
//! the devdoc/userdoc trees, and the evm method-identifier map. Every field
//! the compiler may omit is optional or defaulted, so lookups stay null-safe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One compiled-contract artifact, fully materialized before parsing starts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub abi: Vec<AbiEntry>,
    #[serde(default)]
    pub devdoc: DevDoc,
    #[serde(default)]
    pub userdoc: UserDoc,
    #[serde(default)]
    pub evm: Evm,
}

/// ABI entry category. Entries of any other type (constructor, receive,
/// fallback, ...) deserialize as `Other` and are skipped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiItemKind {
    Function,
    Event,
    Error,
    #[serde(other)]
    Other,
}

/// One element of the ABI list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: AbiItemKind,
    /// Absent for constructor/receive/fallback entries.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    /// Functions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<AbiParam>>,
    /// Functions only: payable | nonpayable | view | pure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

/// A typed parameter (input or output) of an ABI entry.
///
/// `components` is present exactly when the declared type is a tuple
/// (`tuple` or `tuple[]`); recursion through it drives canonical-signature
/// expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Event inputs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<AbiParam>>,
}

/// Developer documentation tree. Method-level fragments are keyed by
/// canonical signature; errors map to an ordered sequence of fragments
/// (the compiler emits one per overloaded declaration site).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevDoc {
    pub author: Option<String>,
    pub title: Option<String>,
    pub details: Option<String>,
    #[serde(default)]
    pub methods: Option<BTreeMap<String, DevMethod>>,
    #[serde(default)]
    pub events: Option<BTreeMap<String, DevMethod>>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<DevMethod>>>,
}

/// One devdoc fragment for a method-like entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevMethod {
    pub details: Option<String>,
    /// Parameter name → description.
    #[serde(default)]
    pub params: Option<BTreeMap<String, String>>,
    /// Output name (or `_<index>` for unnamed outputs) → description.
    #[serde(default)]
    pub returns: Option<BTreeMap<String, String>>,
}

/// User documentation tree — parallel shape to [`DevDoc`] but fragments
/// carry only a notice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDoc {
    pub notice: Option<String>,
    #[serde(default)]
    pub methods: Option<BTreeMap<String, UserMethod>>,
    #[serde(default)]
    pub events: Option<BTreeMap<String, UserMethod>>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<UserMethod>>>,
}

/// One userdoc fragment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMethod {
    pub notice: Option<String>,
}

/// Compiled-bytecode metadata. `methodIdentifiers` maps canonical function
/// signatures to their 4-byte selectors (hex, no 0x prefix).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evm {
    #[serde(default)]
    pub method_identifiers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_from_minimal_json() {
        let artifact: Artifact =
            serde_json::from_str(r#"{"contractName": "Empty"}"#).unwrap();
        assert_eq!(artifact.contract_name, "Empty");
        assert!(artifact.abi.is_empty());
        assert!(artifact.devdoc.methods.is_none());
        assert!(artifact.evm.method_identifiers.is_empty());
    }

    #[test]
    fn abi_entry_unknown_type_is_other() {
        let entry: AbiEntry =
            serde_json::from_str(r#"{"type": "constructor", "inputs": []}"#).unwrap();
        assert_eq!(entry.kind, AbiItemKind::Other);
        assert!(entry.name.is_empty());
    }

    #[test]
    fn abi_param_with_components() {
        let param: AbiParam = serde_json::from_str(
            r#"{
                "name": "order",
                "type": "tuple",
                "internalType": "struct Order",
                "components": [
                    {"name": "maker", "type": "address"},
                    {"name": "amount", "type": "uint256"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(param.ty, "tuple");
        assert_eq!(param.components.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn devdoc_errors_are_sequences() {
        let devdoc: DevDoc = serde_json::from_str(
            r#"{"errors": {"Unauthorized(address)": [{"details": "Caller is not allowed"}]}}"#,
        )
        .unwrap();
        let fragments = &devdoc.errors.unwrap()["Unauthorized(address)"];
        assert_eq!(fragments[0].details.as_deref(), Some("Caller is not allowed"));
    }
}
