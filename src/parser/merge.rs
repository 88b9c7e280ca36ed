//! Cross-reference merge: join ABI entries with doc fragments by signature.
//!
//! One pass per category (functions, events, errors), in ABI declaration
//! order. Doc buckets may be entirely absent — that is expected sparsity.
//! The only integrity check is the selector lookup for functions, which
//! catches ABI/bytecode-metadata drift from stale artifacts.

use crate::artifact::{AbiEntry, AbiItemKind, Artifact};
use crate::model::MethodMap;
use crate::parser::{describe, signature, ParseError};

fn by_kind(abi: &[AbiEntry], kind: AbiItemKind) -> impl Iterator<Item = &AbiEntry> + '_ {
    abi.iter().filter(move |entry| entry.kind == kind)
}

/// Merge all function entries. Every function must resolve a selector in
/// `evm.methodIdentifiers`, keyed by its canonical signature.
pub fn functions(artifact: &Artifact) -> Result<MethodMap, ParseError> {
    let mut merged = MethodMap::new();

    for entry in by_kind(&artifact.abi, AbiItemKind::Function) {
        let sign = signature::canonical(entry);

        let dev = artifact.devdoc.methods.as_ref().and_then(|m| m.get(&sign));
        let user = artifact.userdoc.methods.as_ref().and_then(|m| m.get(&sign));

        let selector = artifact
            .evm
            .method_identifiers
            .get(&sign)
            .ok_or_else(|| ParseError::SelectorNotFound(sign.clone()))?;

        let mut info =
            describe::method_info(entry, dev, user.and_then(|u| u.notice.as_deref()))?;
        info.selector = Some(selector.clone());
        info.returns = describe::returns(dev, entry);

        merged.insert(sign, info);
    }

    Ok(merged)
}

/// Merge all event entries. Events have no selector to validate.
pub fn events(artifact: &Artifact) -> Result<MethodMap, ParseError> {
    let mut merged = MethodMap::new();

    for entry in by_kind(&artifact.abi, AbiItemKind::Event) {
        let sign = signature::canonical(entry);

        let dev = artifact.devdoc.events.as_ref().and_then(|m| m.get(&sign));
        let user = artifact.userdoc.events.as_ref().and_then(|m| m.get(&sign));

        let info = describe::method_info(entry, dev, user.and_then(|u| u.notice.as_deref()))?;
        merged.insert(sign, info);
    }

    Ok(merged)
}

/// Merge all error entries. Doc buckets hold an ordered sequence of fragments
/// per signature; only the first one is used.
pub fn errors(artifact: &Artifact) -> Result<MethodMap, ParseError> {
    let mut merged = MethodMap::new();

    for entry in by_kind(&artifact.abi, AbiItemKind::Error) {
        let sign = signature::canonical(entry);

        let dev = artifact
            .devdoc
            .errors
            .as_ref()
            .and_then(|m| m.get(&sign))
            .and_then(|fragments| fragments.first());
        let user = artifact
            .userdoc
            .errors
            .as_ref()
            .and_then(|m| m.get(&sign))
            .and_then(|fragments| fragments.first());

        let info = describe::method_info(entry, dev, user.and_then(|u| u.notice.as_deref()))?;
        merged.insert(sign, info);
    }

    Ok(merged)
}
