use crate::{
    client::ClientConfig, render, utils, Args, Client, Config, Crawler, Fetch, Settings,
};
use chrono::{DateTime, Utc};
use log::{debug, info};

/// The rendered outputs of a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// The indented outline of all links.
    pub outline: String,
    /// The bookmark file in NETSCAPE format.
    pub bookmarks: String,
}

/// Crawl the configured sections, print the outline, and write the bookmark
/// file.
pub async fn export(config: &Config, args: &Args) -> Result<(), anyhow::Error> {
    debug!("{args:?}");

    if args.dry_run {
        println!("Running in dry mode ...")
    }

    let client_config = ClientConfig::new(&config.settings);
    let client = Client::new(&client_config)?;
    let now = Utc::now();

    let export = export_bookmarks(&config.settings, client, now).await?;

    println!("{}", export.outline);

    if !args.dry_run {
        utils::write_file(&config.output_path, &export.bookmarks)?;
        info!("Wrote bookmark file at {}", config.output_path.display());
        println!("Bookmarks exported to {:?}", config.output_path);
    }

    Ok(())
}

/// Crawl all sections and render the outline and the bookmark file.
///
/// Nothing is rendered unless every section was crawled successfully. All
/// bookmarks are stamped with `now`.
pub async fn export_bookmarks(
    settings: &Settings,
    client: impl Fetch,
    now: DateTime<Utc>,
) -> Result<Export, anyhow::Error> {
    let crawler = Crawler::new(settings, client)?;
    let root = crawler.crawl().await?;

    let outline = render::render_outline(&root);
    let bookmarks = render::render_bookmarks(&root, now.timestamp())?;

    Ok(Export { outline, bookmarks })
}
