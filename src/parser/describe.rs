//! Description assembler — combine ABI shape with doc fragments.

use crate::artifact::{AbiEntry, AbiItemKind, DevMethod};
use crate::model::{BaseDescription, MethodInfo, Param, Return};
use crate::parser::{signature, ParseError};

/// Name plus whatever notice/details the doc fragments supply. Missing text
/// is normal sparsity, never an error.
pub fn base(name: &str, notice: Option<&str>, details: Option<&str>) -> BaseDescription {
    BaseDescription {
        name: name.to_string(),
        notice: notice.map(str::to_string),
        details: details.map(str::to_string),
    }
}

/// Build the method-level record shared by all three categories. Selector and
/// returns stay unset here; the merger fills them in for functions.
pub fn method_info(
    entry: &AbiEntry,
    dev: Option<&DevMethod>,
    notice: Option<&str>,
) -> Result<MethodInfo, ParseError> {
    Ok(MethodInfo {
        base: base(&entry.name, notice, dev.and_then(|d| d.details.as_deref())),
        method_abi: entry.clone(),
        full_method_sign: signature::full(entry)?,
        params: params(dev, entry),
        returns: None,
        selector: None,
    })
}

/// Documented parameters in ABI declaration order. Present only when the
/// devdoc fragment carries a params mapping; inputs without a description
/// are skipped. Event parameters additionally carry their indexed flag.
pub fn params(dev: Option<&DevMethod>, entry: &AbiEntry) -> Option<Vec<Param>> {
    let descriptions = dev?.params.as_ref()?;

    let params = entry
        .inputs
        .iter()
        .filter_map(|input| {
            let description = descriptions.get(&input.name)?;
            Some(Param {
                name: input.name.clone(),
                ty: input.ty.clone(),
                description: description.clone(),
                indexed: (entry.kind == AbiItemKind::Event)
                    .then(|| input.indexed.unwrap_or(false)),
            })
        })
        .collect();

    Some(params)
}

/// Documented return values in output order (functions only). Unnamed outputs
/// are keyed `_<index>` in the devdoc returns mapping.
pub fn returns(dev: Option<&DevMethod>, entry: &AbiEntry) -> Option<Vec<Return>> {
    let descriptions = dev?.returns.as_ref()?;

    let returns = entry
        .outputs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(index, output)| {
            let name = if output.name.is_empty() {
                format!("_{index}")
            } else {
                output.name.clone()
            };
            let description = descriptions.get(&name)?;
            Some(Return {
                name,
                ty: output.ty.clone(),
                description: description.clone(),
            })
        })
        .collect();

    Some(returns)
}
