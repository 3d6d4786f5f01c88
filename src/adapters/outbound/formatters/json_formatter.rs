use crate::application::read_models::{NodeView, TreeReadModel};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonTree<'a> {
    total_dependencies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    total_nodes: usize,
    shown_nodes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    roots: Vec<JsonNode<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    scope: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    matched: bool,
    children: Vec<JsonNode<'a>>,
}

impl<'a> From<&'a NodeView> for JsonNode<'a> {
    fn from(node: &'a NodeView) -> Self {
        Self {
            name: &node.name,
            version: &node.version,
            component_type: &node.component_type,
            scope: &node.scope,
            matched: node.matched,
            children: node.children.iter().map(JsonNode::from).collect(),
        }
    }
}

/// JsonFormatter adapter for emitting the tree as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let tree = JsonTree {
            total_dependencies: model.total_dependencies,
            filter: model.filter.as_deref(),
            total_nodes: model.total_nodes,
            shown_nodes: model.shown_nodes,
            message: model.empty_state_message(),
            roots: model.roots.iter().map(JsonNode::from).collect(),
        };

        let mut json = serde_json::to_string_pretty(&tree)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn model(filter: Option<&str>, roots: Vec<NodeView>) -> TreeReadModel {
        TreeReadModel {
            total_dependencies: 3,
            filter: filter.map(str::to_string),
            shown_nodes: roots.len(),
            roots,
            total_nodes: 2,
        }
    }

    fn view(name: &str, matched: bool) -> NodeView {
        NodeView {
            name: name.to_string(),
            version: "1.0".to_string(),
            component_type: "library".to_string(),
            scope: "optional".to_string(),
            matched,
            children: vec![],
        }
    }

    #[test]
    fn test_format_structure() {
        let mut root = view("app", false);
        root.children.push(view("lib", true));

        let output = JsonFormatter::new()
            .format(&model(Some("li"), vec![root]))
            .unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["totalDependencies"], 3);
        assert_eq!(json["filter"], "li");
        assert_eq!(json["roots"][0]["name"], "app");
        assert_eq!(json["roots"][0]["type"], "library");
        assert!(json["roots"][0].get("matched").is_none());
        assert_eq!(json["roots"][0]["children"][0]["matched"], true);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_format_empty_state_message() {
        let output = JsonFormatter::new().format(&model(Some("zzz"), vec![])).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["message"], "No dependencies match filter 'zzz'.");
        assert_eq!(json["roots"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_format_without_filter_omits_key() {
        let output = JsonFormatter::new().format(&model(None, vec![view("app", false)])).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert!(json.get("filter").is_none());
    }
}
