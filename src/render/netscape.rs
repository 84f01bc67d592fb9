//! Rendering to the NETSCAPE-Bookmark-file-1 format.
//!
//! See <https://learn.microsoft.com/en-us/previous-versions/windows/internet-explorer/ie-developer/platform-apis/aa753582(v=vs.85)>.

use crate::{errors::DocmarksError, html, LinkNode};
use std::fmt::{self, Write};

/// The fixed document header preceding the bookmark list.
pub const BOOKMARKS_HEADER: &str = concat!(
    "<!DOCTYPE NETSCAPE-Bookmark-file-1>",
    "<!-- This is an automatically generated file.\n",
    "     It will be read and overwritten.\n",
    "     DO NOT EDIT! -->",
    r#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">"#,
    "<TITLE>Bookmarks</TITLE>",
    "<H1>Bookmarks</H1>",
);

/// Render the children of `root` as a bookmark document.
///
/// The `root` itself is not rendered. Every entry is stamped with the same
/// `timestamp` (Unix seconds) for `ADD_DATE` and `LAST_MODIFIED`. A leaf
/// without url can't be encoded.
pub fn render_bookmarks(root: &LinkNode, timestamp: i64) -> Result<String, DocmarksError> {
    if let Some(visit) = root
        .walk()
        .skip(1)
        .find(|visit| !visit.node.is_folder() && visit.node.url().is_none())
    {
        return Err(DocmarksError::Encoding(visit.node.title().to_owned()));
    }

    let mut document = String::from(BOOKMARKS_HEADER);
    document.push_str("<DL><p>");

    for child in root.children() {
        render_entry(&mut document, child, timestamp)?;
    }

    document.push_str("</DL>");

    Ok(document)
}

fn render_entry(document: &mut String, node: &LinkNode, timestamp: i64) -> fmt::Result {
    // A folder's own url is not part of the bookmark file.
    if node.is_folder() {
        write!(
            document,
            r#"<DT><H3 ADD_DATE="{timestamp}" LAST_MODIFIED="{timestamp}">{}</H3><DL><p>"#,
            html::escape(node.title())
        )?;

        for child in node.children() {
            render_entry(document, child, timestamp)?;
        }

        document.push_str("</DL><p>");
    } else {
        write!(
            document,
            r#"<DT><A HREF="{}" ADD_DATE="{timestamp}" LAST_MODIFIED="{timestamp}">{}</A>"#,
            html::escape(node.url().unwrap_or_default()),
            html::escape(node.title())
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::{
        toc::{TocSelectors, TreeBuilder},
        SelectorSettings,
    };
    use assert_matches::assert_matches;
    use url::Url;

    const TIMESTAMP: i64 = 1_700_000_000;

    #[test]
    fn test_render_bookmarks() {
        let tree = test_utils::sample_tree();

        let res = render_bookmarks(&tree, TIMESTAMP);
        assert!(res.is_ok(), "{}", res.unwrap_err());

        let expected = format!(
            "{BOOKMARKS_HEADER}<DL><p>\
            <DT><A HREF=\"https://kubernetes.io/setup\" ADD_DATE=\"1700000000\" LAST_MODIFIED=\"1700000000\">Setup</A>\
            <DT><H3 ADD_DATE=\"1700000000\" LAST_MODIFIED=\"1700000000\">Concepts</H3><DL><p>\
            <DT><A HREF=\"https://kubernetes.io/pods\" ADD_DATE=\"1700000000\" LAST_MODIFIED=\"1700000000\">Pods</A>\
            </DL><p>\
            </DL>"
        );
        assert_eq!(res.unwrap(), expected);
    }

    #[test]
    fn test_render_bookmarks_header() {
        let tree = LinkNode::new("Root", None);

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        assert!(document.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1><!-- This is an automatically generated file.\n     It will be read and overwritten.\n     DO NOT EDIT! -->"));
        assert!(document.ends_with("<TITLE>Bookmarks</TITLE><H1>Bookmarks</H1><DL><p></DL>"));
    }

    #[test]
    fn test_render_bookmarks_entry_counts() {
        let tree = test_utils::nested_tree(3, 3);
        let folders = tree
            .walk()
            .skip(1)
            .filter(|visit| visit.node.is_folder())
            .count();
        let leaves = tree
            .walk()
            .skip(1)
            .filter(|visit| !visit.node.is_folder())
            .count();

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        assert_eq!(document.matches("<DT><H3 ").count(), folders);
        assert_eq!(document.matches("</DL><p>").count(), folders);
        assert_eq!(document.matches("<DT><A ").count(), leaves);
    }

    #[test]
    fn test_render_bookmarks_single_timestamp() {
        let tree = test_utils::nested_tree(2, 4);

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        let attribute_values = |attribute: &str| {
            document
                .split(&format!("{attribute}=\""))
                .skip(1)
                .filter_map(|part| part.split('"').next())
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>()
        };
        let add_dates = attribute_values("ADD_DATE");
        let last_modified = attribute_values("LAST_MODIFIED");

        assert_eq!(add_dates.len(), tree.node_count() - 1);
        assert_eq!(add_dates, last_modified);
        assert!(add_dates.iter().all(|stamp| stamp == "1700000000"));
    }

    #[test]
    fn test_render_bookmarks_escaped() {
        let url = String::from("https://kubernetes.io/search?q=a&b=c");
        let mut tree = LinkNode::new("Root", None);
        let mut folder = LinkNode::new("Tools & <Plugins>", None);
        folder.push(LinkNode::new(r#"Say "hello""#, Some(url)));
        tree.push(folder);

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        assert!(document.contains(">Tools &amp; &lt;Plugins&gt;</H3>"));
        assert!(document.contains(r#"HREF="https://kubernetes.io/search?q=a&amp;b=c""#));
        assert!(document.contains(">Say &quot;hello&quot;</A>"));
    }

    #[test]
    fn test_render_bookmarks_href_escaped() {
        let html = test_utils::toc_page(
            r#"
            <a data-title="Root" href="/docs"></a>
            <a data-title="Q" href="/search?q=&quot;a&quot;&lt;b&gt;"></a>
            "#,
        );
        let selectors = TocSelectors::new(&SelectorSettings::default()).unwrap();
        let tree_builder = TreeBuilder::new(Url::parse(test_utils::BASE_URL).unwrap(), selectors);
        let tree = tree_builder.build(&html).unwrap();

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        assert!(document.contains(
            r#"<DT><A HREF="https://kubernetes.io/search?q=&quot;a&quot;&lt;b&gt;" ADD_DATE="1700000000""#
        ));
        assert!(!document.contains("%22"));
    }

    #[test]
    fn test_render_bookmarks_nested_leaf_without_url() {
        let mut folder = LinkNode::new("Concepts", None);
        folder.push(LinkNode::new("Pods", None));
        let mut tree = LinkNode::new("Root", None);
        tree.push(LinkNode::new("Setup", Some(String::from("https://kubernetes.io/setup"))));
        tree.push(folder);

        let res = render_bookmarks(&tree, TIMESTAMP);

        assert_matches!(res, Err(DocmarksError::Encoding(title)) if title == "Pods");
    }

    #[test]
    fn test_render_bookmarks_folder_url_discarded() {
        let tree = test_utils::sample_tree();

        let document = render_bookmarks(&tree, TIMESTAMP).unwrap();

        assert!(!document.contains("https://kubernetes.io/concepts"));
        assert!(!document.contains("https://kubernetes.io/docs"));
    }

    #[test]
    fn test_render_bookmarks_leaf_without_url() {
        let mut tree = LinkNode::new("Root", None);
        tree.push(LinkNode::new("Empty folder", None));

        let res = render_bookmarks(&tree, TIMESTAMP);

        assert_matches!(res, Err(DocmarksError::Encoding(title)) if title == "Empty folder");
    }
}
