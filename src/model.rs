//! Output model for merged contract documentation — format-agnostic.

use crate::artifact::{AbiEntry, AbiItemKind};
use indexmap::IndexMap;
use serde::Serialize;

/// Signature-keyed mapping, preserving ABI declaration order.
pub type MethodMap = IndexMap<String, MethodInfo>;

/// Name plus the two optional description texts every documented item carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseDescription {
    pub name: String,
    /// User-facing text from userdoc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Developer-facing text from devdoc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A documented parameter. `indexed` is set only when the owning entry
/// is an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

/// A documented return value (functions only).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

/// Display-oriented reconstruction of a method declaration.
///
/// Parameters render as `"<type>[ indexed] <name>"`; modifiers and returns
/// are present only for functions, and the `returns` token closes the
/// modifier list only when outputs exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullMethodSign {
    pub kind: AbiItemKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<String>>,
}

/// One merged function, event, or error record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    #[serde(flatten)]
    pub base: BaseDescription,
    /// The raw ABI entry this record was built from.
    pub method_abi: AbiEntry,
    pub full_method_sign: FullMethodSign,
    /// Only parameters that have a devdoc description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,
    /// Functions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<Return>>,
    /// 4-byte selector, functions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// The assembled contract-level record. The three mappings are always
/// present, even when empty — downstream renderers rely on the keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractInfo {
    #[serde(flatten)]
    pub base: BaseDescription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub functions: MethodMap,
    pub events: MethodMap,
    pub errors: MethodMap,
}
