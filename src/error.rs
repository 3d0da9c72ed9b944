use std::{io, path::PathBuf};
use thiserror::Error;
use url::Url;

/// Errors that end a run before any image is downloaded.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("unable to fetch page {url}: {source}")]
    PageFetch {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("unable to create output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single image; recorded and skipped, never fatal.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
