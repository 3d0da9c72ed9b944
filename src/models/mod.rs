pub mod cli;
pub mod download;
pub mod page;

pub use cli::Cli;
pub use download::{DownloadResult, RunSummary};
pub use page::TargetPage;
