use crate::{errors::DocmarksError, settings::SelectorSettings, LinkNode};
use log::trace;
use scraper::{ElementRef, Html, Selector};
use url::{Position, Url};

const TITLE_ATTRIBUTE: &str = "data-title";
const HREF_ATTRIBUTE: &str = "href";

/// An entry in the table of contents, classified before it is converted to a
/// [`LinkNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocElement {
    /// A plain link.
    Anchor { title: String, url: String },
    /// A group of entries, optionally linking to an overview page.
    Folder {
        title: String,
        url: Option<String>,
        content: Vec<TocElement>,
    },
}

impl From<TocElement> for LinkNode {
    fn from(element: TocElement) -> Self {
        match element {
            TocElement::Anchor { title, url } => LinkNode::new(title, Some(url)),
            TocElement::Folder {
                title,
                url,
                content,
            } => LinkNode::with_children(
                title,
                url,
                content.into_iter().map(LinkNode::from).collect(),
            ),
        }
    }
}

/// A parsed CSS selector which remembers its source for error messages.
#[derive(Debug)]
struct CssSelector {
    source: String,
    selector: Selector,
}

impl CssSelector {
    fn parse(source: &str) -> Result<Self, DocmarksError> {
        let selector = Selector::parse(source).map_err(|err| DocmarksError::InvalidSelector {
            selector: source.to_owned(),
            err: format!("{err:?}"),
        })?;
        Ok(Self {
            source: source.to_owned(),
            selector,
        })
    }
}

/// The selectors to locate the table of contents in a page.
#[derive(Debug)]
pub struct TocSelectors {
    toc: CssSelector,
    accordion: CssSelector,
    container: CssSelector,
}

impl TocSelectors {
    pub fn new(settings: &SelectorSettings) -> Result<Self, DocmarksError> {
        Ok(Self {
            toc: CssSelector::parse(&settings.toc)?,
            accordion: CssSelector::parse(&settings.accordion)?,
            container: CssSelector::parse(&settings.container)?,
        })
    }
}

/// Builds the link tree from the table of contents of a page.
#[derive(Debug)]
pub struct TreeBuilder {
    base_url: Url,
    selectors: TocSelectors,
}

impl TreeBuilder {
    pub fn new(base_url: Url, selectors: TocSelectors) -> Self {
        Self {
            base_url,
            selectors,
        }
    }

    /// Build the tree for the table of contents in `html`.
    ///
    /// The first entry of the accordion becomes the root. Only its title and
    /// url are used, its nested entries are skipped. The remaining entries
    /// become the children of the root.
    pub fn build(&self, html: &str) -> Result<LinkNode, DocmarksError> {
        let document = Html::parse_document(html);
        let toc = document
            .select(&self.selectors.toc.selector)
            .next()
            .ok_or_else(|| DocmarksError::MissingElement(self.selectors.toc.source.clone()))?;
        let accordion = toc
            .select(&self.selectors.accordion.selector)
            .next()
            .ok_or_else(|| {
                DocmarksError::MissingElement(self.selectors.accordion.source.clone())
            })?;

        let mut entries = accordion.children().filter_map(ElementRef::wrap);
        let root_entry = entries.next().ok_or_else(|| {
            DocmarksError::MissingElement(format!("{} > *", self.selectors.accordion.source))
        })?;

        let mut root = LinkNode::new(title(root_entry)?, Some(self.required_href(root_entry)?));

        for entry in entries {
            let element = self.classify(entry)?;
            root.push(LinkNode::from(element));
        }

        Ok(root)
    }

    /// Classify an entry as anchor or folder, including the nested entries of
    /// a folder.
    pub fn classify(&self, element: ElementRef<'_>) -> Result<TocElement, DocmarksError> {
        let title = title(element)?;

        if element.value().name() == "a" {
            let url = self.required_href(element)?;
            trace!("Classified anchor '{title}' ({url})");
            return Ok(TocElement::Anchor { title, url });
        }

        let url = self.href(element)?;
        let container = element
            .select(&self.selectors.container.selector)
            .next()
            .ok_or_else(|| DocmarksError::MissingContainer {
                selector: self.selectors.container.source.clone(),
                title: title.clone(),
            })?;
        let content = container
            .children()
            .filter_map(ElementRef::wrap)
            .map(|child| self.classify(child))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            "Classified folder '{title}' with {} entries",
            content.len()
        );

        Ok(TocElement::Folder {
            title,
            url,
            content,
        })
    }

    fn required_href(&self, element: ElementRef<'_>) -> Result<String, DocmarksError> {
        let href = element
            .value()
            .attr(HREF_ATTRIBUTE)
            .ok_or_else(|| missing_attribute(element, HREF_ATTRIBUTE))?;
        resolve(&self.base_url, href)
    }

    /// An empty `href` counts as missing.
    fn href(&self, element: ElementRef<'_>) -> Result<Option<String>, DocmarksError> {
        match element.value().attr(HREF_ATTRIBUTE) {
            Some(href) if !href.is_empty() => Ok(Some(resolve(&self.base_url, href)?)),
            _ => Ok(None),
        }
    }
}

/// Resolve `href` against `base_url`, keeping the text of `href` as written.
///
/// An absolute `href` is returned unchanged. A relative `href` is appended to
/// the matching part of `base_url`. Only an empty `href` or one with `.` or
/// `..` path segments is taken from the normalized url.
pub fn resolve(base_url: &Url, href: &str) -> Result<String, DocmarksError> {
    let joined = base_url.join(href)?;

    if Url::parse(href).is_ok() {
        return Ok(href.to_owned());
    }

    if href.is_empty() || has_dot_segments(href) {
        return Ok(String::from(joined));
    }

    let resolved = if href.starts_with("//") {
        format!("{}:{href}", base_url.scheme())
    } else if href.starts_with('/') {
        format!("{}{href}", &base_url[..Position::BeforePath])
    } else if href.starts_with('?') {
        format!("{}{href}", &base_url[..Position::AfterPath])
    } else if href.starts_with('#') {
        format!("{}{href}", &base_url[..Position::AfterQuery])
    } else {
        let path = &base_url[..Position::AfterPath];
        let directory = path.rfind('/').map_or(path, |index| &path[..=index]);
        format!("{directory}{href}")
    };

    Ok(resolved)
}

fn has_dot_segments(href: &str) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    path.split('/').any(|segment| segment == "." || segment == "..")
}

fn title(element: ElementRef<'_>) -> Result<String, DocmarksError> {
    match element.value().attr(TITLE_ATTRIBUTE) {
        Some(title) if !title.is_empty() => Ok(title.to_owned()),
        _ => Err(missing_attribute(element, TITLE_ATTRIBUTE)),
    }
}

fn missing_attribute(element: ElementRef<'_>, attribute: &str) -> DocmarksError {
    DocmarksError::MissingAttribute {
        attribute: attribute.to_owned(),
        element: element.value().name().to_owned(),
    }
}
