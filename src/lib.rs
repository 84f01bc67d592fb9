/// Available arguments.
mod args;
/// The client for fetching websites.
mod client;
/// Available commands.
pub mod cmd;
/// The configuration used in Docmarks.
mod config;
/// Crawl the sections of a documentation website.
mod crawler;
/// The errors returned by Docmarks.
pub mod errors;
/// Helper functions to work with HTML.
pub mod html;
/// Helper function to work with JSON.
mod json;
/// The tree of links.
mod link;
/// Logging to stderr.
mod logger;
/// Render the tree of links as outline or bookmark file.
pub mod render;
/// The settings used in Docmarks.
mod settings;
/// Utilities used in testing.
pub mod test_utils;
/// Extract the tree of links from the table of contents.
pub mod toc;
/// Utilities to work with files.
pub mod utils;

pub use args::Args;
pub use client::{Client, ClientConfig, Fetch, MockClient};
pub use config::Config;
pub use crawler::Crawler;
pub use link::{LinkNode, Visit, Walk};
pub use logger::Logger;
pub use settings::{SelectorSettings, Settings, SettingsArgs};
