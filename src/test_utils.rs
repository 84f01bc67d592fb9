use crate::{toc, LinkNode};
use url::Url;

pub const BASE_URL: &str = "https://kubernetes.io/";

/// The tree `Root { Setup, Concepts { Pods } }` with urls resolved against
/// [`BASE_URL`].
pub fn sample_tree() -> LinkNode {
    let base_url = Url::parse(BASE_URL).unwrap();
    let url = |href: &str| Some(toc::resolve(&base_url, href).unwrap());

    LinkNode::with_children(
        "Root",
        url("/docs"),
        vec![
            LinkNode::new("Setup", url("/setup")),
            LinkNode::with_children(
                "Concepts",
                url("/concepts"),
                vec![LinkNode::new("Pods", url("/pods"))],
            ),
        ],
    )
}

/// A tree where every node above `depth` has `width` children.
pub fn nested_tree(depth: usize, width: usize) -> LinkNode {
    fn node(path: String, depth: usize, width: usize) -> LinkNode {
        let url = toc::resolve(&Url::parse(BASE_URL).unwrap(), &path).ok();
        let children = if depth == 0 {
            Vec::new()
        } else {
            (0..width)
                .map(|index| node(format!("{path}/{index}"), depth - 1, width))
                .collect()
        };
        LinkNode::with_children(format!("Page {path}"), url, children)
    }

    node("docs".to_owned(), depth, width)
}

/// Wrap the entries of the accordion in a documentation page.
pub fn toc_page(accordion_entries: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Documentation</title></head>
<body>
    <div id="docsToc">
        <div class="pi-accordion">{accordion_entries}</div>
    </div>
    <main><h1>Documentation</h1></main>
</body>
</html>"#
    )
}

/// The page of the fixture `Root { Setup, Concepts { Pods } }`.
pub fn sample_toc_page() -> String {
    toc_page(
        r#"
        <a class="item" data-title="Root" href="/docs"></a>
        <a class="item" data-title="Setup" href="/setup"></a>
        <div class="item" data-title="Concepts" href="/concepts">
            <div class="container">
                <a class="item" data-title="Pods" href="/pods"></a>
            </div>
        </div>
        "#,
    )
}

/// A minimal page for a documentation section with a single leaf.
pub fn section_page(title: &str, path: &str) -> String {
    toc_page(&format!(
        r#"
        <a class="item" data-title="{title}" href="/{path}"></a>
        <div class="item" data-title="{title} overview">
            <div class="container">
                <a class="item" data-title="{title} &amp; more" href="/{path}/more"></a>
            </div>
        </div>
        "#
    ))
}
