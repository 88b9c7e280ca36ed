//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the merged ContractInfo directly; mapping keys come out in
//! ABI declaration order.

use crate::model::ContractInfo;
use crate::render::Renderer;
use anyhow::Result;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, contract: &ContractInfo) -> Result<String> {
        let mut out = serde_json::to_string_pretty(contract)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseDescription, MethodMap};

    #[test]
    fn optional_fields_are_omitted() {
        let contract = ContractInfo {
            base: BaseDescription {
                name: "Empty".to_string(),
                notice: None,
                details: None,
            },
            author: None,
            title: None,
            functions: MethodMap::new(),
            events: MethodMap::new(),
            errors: MethodMap::new(),
        };

        let out = JsonRenderer.render(&contract).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Empty");
        assert!(value.get("notice").is_none());
        assert!(value.get("author").is_none());
        assert!(value["functions"].as_object().unwrap().is_empty());
    }
}
