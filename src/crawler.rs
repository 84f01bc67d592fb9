use crate::{
    errors::DocmarksError,
    toc::{self, TocSelectors, TreeBuilder},
    Fetch, LinkNode, Settings,
};
use log::{debug, info};
use url::Url;

/// Crawls the configured sections and assembles their trees under a single
/// root.
#[derive(Debug)]
pub struct Crawler<F: Fetch> {
    client: F,
    tree_builder: TreeBuilder,
    base_url: Url,
    root_title: String,
    root_path: String,
    sections: Vec<String>,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(settings: &Settings, client: F) -> Result<Self, DocmarksError> {
        let base_url = Url::parse(&settings.base_url)?;
        let selectors = TocSelectors::new(&settings.selectors)?;
        let tree_builder = TreeBuilder::new(base_url.clone(), selectors);

        Ok(Self {
            client,
            tree_builder,
            base_url,
            root_title: settings.root_title.clone(),
            root_path: settings.root_path.clone(),
            sections: settings.sections.clone(),
        })
    }

    /// Fetch the sections one after another.
    ///
    /// The first failing section aborts the crawl.
    pub async fn crawl(&self) -> Result<LinkNode, DocmarksError> {
        let root_url = toc::resolve(&self.base_url, &self.root_path)?;
        let mut root = LinkNode::new(self.root_title.as_str(), Some(root_url));

        for section in &self.sections {
            let section_url = self.base_url.join(section)?;
            debug!("Crawl section ({section_url})");

            let html = self.client.fetch(&section_url).await?;
            let tree = self.tree_builder.build(&html)?;

            debug!("Crawled section ({section_url}) with {} links", tree.node_count());
            root.push(tree);
        }

        info!(
            "Crawled {} sections with {} links",
            self.sections.len(),
            root.node_count()
        );

        Ok(root)
    }
}
