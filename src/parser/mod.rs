//! Parser module — merges ABI, devdoc, and userdoc into one contract record.
//!
//! `parse_contract` is the single entry point. It is a pure, single-pass
//! transform: nothing is cached, nothing is mutated afterwards, and identical
//! inputs always produce a structurally identical `ContractInfo`.

pub mod describe;
pub mod merge;
pub mod signature;

use crate::artifact::Artifact;
use crate::model::ContractInfo;
use thiserror::Error;

/// The two unrecoverable input conditions. Everything else that can be
/// missing from the doc trees is resolved by omitting the optional field.
#[derive(Debug, Error)]
pub enum ParseError {
    /// ABI/bytecode-metadata drift: the compiled artifact knows no selector
    /// for a function the ABI declares.
    #[error("no selector found for function {0}")]
    SelectorNotFound(String),
    /// Malformed or unsupported ABI input.
    #[error("unrecognized state mutability {0:?}")]
    UnknownStateMutability(String),
}

/// Assemble the contract-level record from one artifact.
///
/// The three category mappings are always attached, even when empty.
pub fn parse_contract(artifact: &Artifact) -> Result<ContractInfo, ParseError> {
    Ok(ContractInfo {
        base: describe::base(
            &artifact.contract_name,
            artifact.userdoc.notice.as_deref(),
            artifact.devdoc.details.as_deref(),
        ),
        author: artifact.devdoc.author.clone(),
        title: artifact.devdoc.title.clone(),
        functions: merge::functions(artifact)?,
        events: merge::events(artifact)?,
        errors: merge::errors(artifact)?,
    })
}
