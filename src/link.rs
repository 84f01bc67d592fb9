use crate::render;
use std::fmt;

/// A titled link in the table of contents.
///
/// A node with children is a folder, a node without children is a leaf. The
/// url is kept as resolved text, without percent-encoding or other
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    title: String,
    url: Option<String>,
    children: Vec<LinkNode>,
}

impl LinkNode {
    pub fn new(title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: title.into(),
            url,
            children: Vec::new(),
        }
    }

    pub fn with_children(
        title: impl Into<String>,
        url: Option<String>,
        children: Vec<LinkNode>,
    ) -> Self {
        Self {
            title: title.into(),
            url,
            children,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn children(&self) -> &[LinkNode] {
        &self.children
    }

    /// Append a child in document order.
    pub fn push(&mut self, child: LinkNode) {
        self.children.push(child);
    }

    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }

    /// The number of nodes in the tree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Visit the tree depth-first in pre-order, starting at `self` with depth 0.
    ///
    /// Every call starts a fresh traversal.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Visit {
                depth: 0,
                parent: None,
                node: self,
            }],
        }
    }
}

impl fmt::Display for LinkNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render::render_outline(self))
    }
}

/// A node visited by [`LinkNode::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub depth: usize,
    pub parent: Option<&'a LinkNode>,
    pub node: &'a LinkNode,
}

/// Depth-first pre-order iterator over a [`LinkNode`] tree.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;

        // Push in reverse so the first child is visited next.
        self.stack
            .extend(visit.node.children.iter().rev().map(|child| Visit {
                depth: visit.depth + 1,
                parent: Some(visit.node),
                node: child,
            }));

        Some(visit)
    }
}
