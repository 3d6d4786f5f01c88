use crate::application::read_models::{NodeView, TreeReadModel};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// TextTreeFormatter adapter for rendering the tree with box-drawing guides
///
/// Each row reads `name@version (type, scope)`. With colour enabled, names
/// that matched the filter are highlighted.
pub struct TextTreeFormatter {
    colored: bool,
}

impl TextTreeFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn render_summary(&self, output: &mut String, model: &TreeReadModel) {
        output.push_str(&format!(
            "Total dependencies: {}\n",
            model.total_dependencies
        ));
        if let Some(filter) = &model.filter {
            output.push_str(&format!(
                "Filter: '{}' (showing {} of {} nodes)\n",
                filter, model.shown_nodes, model.total_nodes
            ));
        }
        output.push('\n');
    }

    fn render_label(&self, node: &NodeView) -> String {
        let name = if self.colored && node.matched {
            node.name.yellow().bold().to_string()
        } else {
            node.name.clone()
        };
        format!(
            "{}@{} ({}, {})",
            name, node.version, node.component_type, node.scope
        )
    }

    fn render_children(&self, output: &mut String, children: &[NodeView], prefix: &str) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            let (connector, indent) = if is_last {
                (LAST_BRANCH, SPACE_INDENT)
            } else {
                (BRANCH, PIPE_INDENT)
            };

            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(&self.render_label(child));
            output.push('\n');

            let child_prefix = format!("{}{}", prefix, indent);
            self.render_children(output, &child.children, &child_prefix);
        }
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, model: &TreeReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_summary(&mut output, model);

        if let Some(message) = model.empty_state_message() {
            output.push_str(&message);
            output.push('\n');
            return Ok(output);
        }

        for root in &model.roots {
            output.push_str(&self.render_label(root));
            output.push('\n');
            self.render_children(&mut output, &root.children, "");
        }

        Ok(output)
    }
}
