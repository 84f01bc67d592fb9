use crate::LinkNode;

/// The indentation per level of depth.
pub const INDENT: &str = "    ";

/// Render the tree as an indented Markdown list, one line per node.
///
/// A node without url renders an empty link target.
pub fn render_outline(root: &LinkNode) -> String {
    root.walk()
        .map(|visit| {
            format!(
                "{} - [{}]({})",
                INDENT.repeat(visit.depth),
                visit.node.title(),
                visit.node.url().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
