//! GitHub-flavored markdown renderer.
//!
//! One page per contract: header with title/author/notice/details, then a
//! section per category with each method's reconstructed declaration and its
//! documented parameters and return values.

use crate::artifact::AbiItemKind;
use crate::model::{ContractInfo, FullMethodSign, MethodInfo, MethodMap, Param};
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, contract: &ContractInfo) -> Result<String> {
        let mut output = String::new();

        let heading = contract.title.as_deref().unwrap_or(&contract.base.name);
        output.push_str(&format!("# {}\n\n", heading));

        if let Some(ref author) = contract.author {
            output.push_str(&format!("> Author: {}\n\n", author));
        }

        if let Some(ref notice) = contract.base.notice {
            output.push_str(notice);
            output.push_str("\n\n");
        }

        if let Some(ref details) = contract.base.details {
            output.push_str(details);
            output.push_str("\n\n");
        }

        render_category(&mut output, "Functions", &contract.functions);
        render_category(&mut output, "Events", &contract.events);
        render_category(&mut output, "Errors", &contract.errors);

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_category(output: &mut String, title: &str, methods: &MethodMap) {
    if methods.is_empty() {
        return;
    }

    output.push_str(&format!("## {}\n\n", title));

    for info in methods.values() {
        output.push_str(&render_method(info));
        output.push('\n');
    }
}

/// Render a single method's documentation block.
fn render_method(info: &MethodInfo) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", info.base.name));

    lines.push("```solidity".to_string());
    lines.push(declaration(&info.full_method_sign));
    lines.push("```".to_string());
    lines.push(String::new());

    if let Some(ref selector) = info.selector {
        lines.push(format!("Selector: `0x{}`", selector));
        lines.push(String::new());
    }

    if let Some(ref notice) = info.base.notice {
        lines.push(notice.clone());
        lines.push(String::new());
    }

    if let Some(ref details) = info.base.details {
        lines.push(details.clone());
        lines.push(String::new());
    }

    if let Some(params) = info.params.as_deref().filter(|p| !p.is_empty()) {
        lines.push("#### Parameters\n".to_string());
        for param in params {
            lines.push(format!("* {}", render_param(param)));
        }
        lines.push(String::new());
    }

    if let Some(returns) = info.returns.as_deref().filter(|r| !r.is_empty()) {
        lines.push("#### Return values\n".to_string());
        for ret in returns {
            lines.push(format!("* **{}** ({}): {}", ret.name, ret.ty, ret.description));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Reassemble a Solidity-style declaration from the full signature record.
///
/// `function transfer(address to, uint256 amount) external returns (bool)`
fn declaration(sign: &FullMethodSign) -> String {
    let keyword = match sign.kind {
        AbiItemKind::Function => "function",
        AbiItemKind::Event => "event",
        AbiItemKind::Error => "error",
        AbiItemKind::Other => "function",
    };

    let parameters = sign
        .parameters
        .as_deref()
        .unwrap_or_default()
        .join(", ");

    let mut decl = format!("{} {}({})", keyword, sign.name, parameters);

    if let Some(ref modifiers) = sign.modifiers {
        decl.push(' ');
        decl.push_str(&modifiers.join(" "));
    }

    if let Some(ref returns) = sign.returns {
        decl.push_str(&format!(" ({})", returns.join(", ")));
    }

    decl
}

/// `**to** (address): Recipient` — indexed event parameters get a marker.
fn render_param(param: &Param) -> String {
    let indexed = if param.indexed == Some(true) { ", indexed" } else { "" };
    format!("**{}** ({}{}): {}", param.name, param.ty, indexed, param.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(kind: AbiItemKind, name: &str) -> FullMethodSign {
        FullMethodSign {
            kind,
            name: name.to_string(),
            parameters: None,
            modifiers: None,
            returns: None,
        }
    }

    #[test]
    fn declaration_function_with_returns() {
        let full = FullMethodSign {
            parameters: Some(vec!["address to".to_string(), "uint256 amount".to_string()]),
            modifiers: Some(vec!["external".to_string(), "returns".to_string()]),
            returns: Some(vec!["bool".to_string()]),
            ..sign(AbiItemKind::Function, "transfer")
        };
        assert_eq!(
            declaration(&full),
            "function transfer(address to, uint256 amount) external returns (bool)"
        );
    }

    #[test]
    fn declaration_view_function() {
        let full = FullMethodSign {
            modifiers: Some(vec!["external".to_string(), "view".to_string()]),
            ..sign(AbiItemKind::Function, "paused")
        };
        assert_eq!(declaration(&full), "function paused() external view");
    }

    #[test]
    fn declaration_event_with_indexed() {
        let full = FullMethodSign {
            parameters: Some(vec![
                "address indexed from".to_string(),
                "uint256 value".to_string(),
            ]),
            ..sign(AbiItemKind::Event, "Transfer")
        };
        assert_eq!(
            declaration(&full),
            "event Transfer(address indexed from, uint256 value)"
        );
    }

    #[test]
    fn declaration_error() {
        let full = FullMethodSign {
            parameters: Some(vec!["address account".to_string()]),
            ..sign(AbiItemKind::Error, "Unauthorized")
        };
        assert_eq!(declaration(&full), "error Unauthorized(address account)");
    }

    #[test]
    fn param_indexed_marker() {
        let param = Param {
            name: "from".to_string(),
            ty: "address".to_string(),
            description: "Sender".to_string(),
            indexed: Some(true),
        };
        assert_eq!(render_param(&param), "**from** (address, indexed): Sender");
    }
}
