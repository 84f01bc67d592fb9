use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum DocmarksError {
    #[error("Can't parse url: {0}")]
    ParseUrl(#[from] ParseError),
    #[error("Invalid selector `{selector}`: {err}")]
    InvalidSelector { selector: String, err: String },
    #[error("Missing element for selector `{0}`")]
    MissingElement(String),
    #[error("Missing attribute `{attribute}` on element <{element}>")]
    MissingAttribute { attribute: String, element: String },
    #[error("Missing container `{selector}` in folder '{title}'")]
    MissingContainer { selector: String, title: String },
    #[error("Can't encode bookmark '{0}': missing url")]
    Encoding(String),
    #[error("Can't write bookmarks: {0}")]
    Write(#[from] std::fmt::Error),
    #[error("Can't create client: {0}")]
    CreateClient(reqwest::Error),
    #[error("Can't fetch website: {0}")]
    FetchWebsite(reqwest::Error),
    #[error("Can't fetch website ({url}): {status}")]
    HttpStatus { status: String, url: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
