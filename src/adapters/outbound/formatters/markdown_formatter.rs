use crate::application::read_models::{NodeView, TreeReadModel};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter for rendering the tree as a nested list
///
/// Matched names are set in bold so they stand out without colour.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes characters that would otherwise start Markdown emphasis or code
    fn escape_markdown(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '*' | '_' | '`' | '[' | ']' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    /// Makes text safe inside a single-backtick code span
    fn code_span(text: &str) -> String {
        format!("`{}`", text.replace('`', "'"))
    }

    fn render_header(&self, output: &mut String, model: &TreeReadModel) {
        output.push_str("# Dependencies\n\n");
        output.push_str(&format!(
            "Total dependencies: **{}**\n\n",
            model.total_dependencies
        ));
        if let Some(filter) = &model.filter {
            output.push_str(&format!(
                "Filter: {} (showing {} of {} nodes)\n\n",
                Self::code_span(filter),
                model.shown_nodes,
                model.total_nodes
            ));
        }
    }

    fn render_node(&self, output: &mut String, node: &NodeView, level: usize) {
        let name = Self::escape_markdown(&node.name);
        let name = if node.matched {
            format!("**{}**", name)
        } else {
            name
        };
        output.push_str(&format!(
            "{}- {} {} ({}, {})\n",
            "  ".repeat(level),
            name,
            Self::code_span(&node.version),
            Self::escape_markdown(&node.component_type),
            Self::escape_markdown(&node.scope)
        ));
        for child in &node.children {
            self.render_node(output, child, level + 1);
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, model);

        if let Some(message) = model.empty_state_message() {
            output.push_str(&format!("_{}_\n", message));
            return Ok(output);
        }

        for root in &model.roots {
            self.render_node(&mut output, root, 0);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: &str, matched: bool, children: Vec<NodeView>) -> NodeView {
        NodeView {
            name: name.to_string(),
            version: "2.1".to_string(),
            component_type: "library".to_string(),
            scope: "Unknown".to_string(),
            matched,
            children,
        }
    }

    fn model(filter: Option<&str>, roots: Vec<NodeView>) -> TreeReadModel {
        TreeReadModel {
            total_dependencies: 1,
            filter: filter.map(str::to_string),
            roots,
            total_nodes: 2,
            shown_nodes: 2,
        }
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(MarkdownFormatter::escape_markdown("snake_case"), "snake\\_case");
        assert_eq!(MarkdownFormatter::escape_markdown("plain"), "plain");
    }

    #[test]
    fn test_format_nested_list() {
        let roots = vec![view("app", false, vec![view("lib", false, vec![])])];

        let output = MarkdownFormatter::new().format(&model(None, roots)).unwrap();

        assert!(output.starts_with("# Dependencies\n\n"));
        assert!(output.contains("Total dependencies: **1**"));
        assert!(output.contains("- app `2.1` (library, Unknown)\n  - lib `2.1` (library, Unknown)\n"));
    }

    #[test]
    fn test_format_version_with_backtick() {
        let mut node = view("app", false, vec![]);
        node.version = "1.0`beta".to_string();

        let output = MarkdownFormatter::new().format(&model(None, vec![node])).unwrap();

        assert!(output.contains("- app `1.0'beta` (library, Unknown)\n"));
    }

    #[test]
    fn test_format_filter_with_backtick() {
        let roots = vec![view("app", true, vec![])];

        let output = MarkdownFormatter::new()
            .format(&model(Some("a`p"), roots))
            .unwrap();

        assert!(output.contains("Filter: `a'p` (showing 2 of 2 nodes)"));
    }

    #[test]
    fn test_format_bolds_matches() {
        let roots = vec![view("app", false, vec![view("lib", true, vec![])])];

        let output = MarkdownFormatter::new()
            .format(&model(Some("li"), roots))
            .unwrap();

        assert!(output.contains("Filter: `li` (showing 2 of 2 nodes)"));
        assert!(output.contains("- **lib** `2.1`"));
        assert!(output.contains("- app `2.1`"));
    }

    #[test]
    fn test_format_empty_state() {
        let output = MarkdownFormatter::new()
            .format(&model(Some("zzz"), vec![]))
            .unwrap();

        assert!(output.ends_with("_No dependencies match filter 'zzz'._\n"));
    }
}
