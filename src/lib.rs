pub mod configuration;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod models;
pub mod page_fetcher;
pub mod prompt;
pub mod resolver;
pub mod run;

pub use configuration::{FetchConfig, Settings};
pub use error::{Error, ImageError};
pub use models::{Cli, DownloadResult, RunSummary};
pub use run::run;
