use crate::settings::SettingsArgs;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Describes the available arguments in the CLI.
///
/// Without arguments, the Kubernetes documentation is exported.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// The settings file in JSON format.
    #[arg(long, env = "DOCMARKS_SETTINGS")]
    pub settings: Option<PathBuf>,
    /// The base url the sections and links are resolved against.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
    /// The paths of the sections to be crawled.
    ///
    /// Multiple sections are separated by a comma.
    #[arg(long, value_name = "PATHS", num_args = 0.., value_delimiter = ',')]
    pub sections: Vec<String>,
    /// The bookmark file to be written.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
    /// The request timeout in milliseconds.
    #[arg(long, value_name = "MILLISECONDS")]
    pub request_timeout: Option<u64>,
    /// Print the outline without writing the bookmark file.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

impl From<&Args> for SettingsArgs {
    fn from(args: &Args) -> Self {
        Self {
            base_url: args.base_url.clone(),
            sections: args.sections.clone(),
            output_file: args.output.clone(),
            request_timeout: args.request_timeout,
        }
    }
}
