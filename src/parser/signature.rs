//! Signature builder — canonical lookup keys and display signatures.
//!
//! The canonical form must byte-for-byte match the compiler's own
//! canonicalization (no spaces, recursive tuple expansion), since it is the
//! key shared by devdoc, userdoc, and the methodIdentifiers map. A formatting
//! drift here does not error — lookups just silently come back empty.

use crate::artifact::{AbiEntry, AbiItemKind, AbiParam};
use crate::model::FullMethodSign;
use crate::parser::ParseError;

/// Canonical signature of a method-like ABI entry: `name(type1,type2,...)`.
pub fn canonical(entry: &AbiEntry) -> String {
    let types: Vec<String> = entry.inputs.iter().map(type_token).collect();
    format!("{}({})", entry.name, types.join(","))
}

/// Canonical type token for one parameter. Tuples expand recursively to
/// `(inner1,inner2,...)`, with `[]` appended when the declared type is
/// `tuple[]`; leaf types pass through verbatim.
fn type_token(param: &AbiParam) -> String {
    match &param.components {
        Some(components) => {
            let inner: Vec<String> = components.iter().map(type_token).collect();
            let suffix = if param.ty == "tuple[]" { "[]" } else { "" };
            format!("({}){}", inner.join(","), suffix)
        }
        None => param.ty.clone(),
    }
}

/// Build the display-oriented full signature for an entry.
///
/// Fails only for functions whose `stateMutability` is not one of the four
/// recognized tokens.
pub fn full(entry: &AbiEntry) -> Result<FullMethodSign, ParseError> {
    let mut sign = FullMethodSign {
        kind: entry.kind,
        name: entry.name.clone(),
        parameters: None,
        modifiers: None,
        returns: None,
    };

    let parameters: Vec<String> = entry
        .inputs
        .iter()
        .map(|input| {
            let indexed = if entry.kind == AbiItemKind::Event && input.indexed.unwrap_or(false) {
                " indexed"
            } else {
                ""
            };
            format!("{}{} {}", input.ty, indexed, input.name)
        })
        .collect();

    if !parameters.is_empty() {
        sign.parameters = Some(parameters);
    }

    if entry.kind == AbiItemKind::Function {
        let mutability = entry.state_mutability.as_deref().unwrap_or_default();
        let mut modifiers = mutability_modifiers(mutability)?;

        let returns: Vec<String> = entry
            .outputs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|output| {
                if output.name.is_empty() {
                    output.ty.clone()
                } else {
                    format!("{} {}", output.ty, output.name)
                }
            })
            .collect();

        if !returns.is_empty() {
            modifiers.push("returns".to_string());
            sign.returns = Some(returns);
        }

        sign.modifiers = Some(modifiers);
    }

    Ok(sign)
}

/// Fixed state-mutability → modifier-token table. Exposed functions are
/// always `external` in the reconstructed declaration.
fn mutability_modifiers(state_mutability: &str) -> Result<Vec<String>, ParseError> {
    let tokens: &[&str] = match state_mutability {
        "payable" => &["external", "payable"],
        "nonpayable" => &["external"],
        "view" => &["external", "view"],
        "pure" => &["external", "pure"],
        other => return Err(ParseError::UnknownStateMutability(other.to_string())),
    };
    Ok(tokens.iter().map(|t| t.to_string()).collect())
}
