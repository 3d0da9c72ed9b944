use std::{fmt, path::PathBuf};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    Saved { url: Url, path: PathBuf },
    Failed { url: Url, error: String },
}

impl DownloadResult {
    pub fn url(&self) -> &Url {
        match self {
            DownloadResult::Saved { url, .. } | DownloadResult::Failed { url, .. } => url,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadResult::Saved { .. })
    }
}

/// Outcome of a whole run, one entry per accepted image URL.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub results: Vec<DownloadResult>,
}

impl RunSummary {
    pub fn saved(&self) -> usize {
        self.results.iter().filter(|r| r.is_saved()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DownloadResult> {
        self.results.iter().filter(|r| !r.is_saved())
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.saved(), self.total())
    }
}
