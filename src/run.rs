use crate::{
    configuration::FetchConfig,
    downloader::download_all,
    error::Error,
    extractor::extract_candidates,
    models::RunSummary,
    page_fetcher::{build_client, fetch_page},
    resolver::resolve_images,
};
use log::{debug, info, warn};
use std::fs;

/// Fetches the target page and downloads every supported image it references.
///
/// Only page-level problems are returned as errors. Individual image failures
/// end up in the returned [`RunSummary`].
pub async fn run(config: &FetchConfig) -> Result<RunSummary, Error> {
    let client = build_client(config)?;
    let page = fetch_page(&client, config).await?;

    let candidates = extract_candidates(&page.html_text());
    debug!("{} candidate references on {}", candidates.len(), page.url);

    let urls = resolve_images(&page.url, &candidates);
    info!("Found {} images to download", urls.len());

    info!("Output Directory: {}", config.output_dir.display());
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::OutputDirectory {
        path: config.output_dir.clone(),
        source,
    })?;

    let results = download_all(&client, &urls, config).await;
    let summary = RunSummary {
        output_dir: config.output_dir.clone(),
        results,
    };

    if summary.saved() < summary.total() {
        warn!("{} images failed", summary.total() - summary.saved());
    }
    info!(
        "Download complete! {} images saved to '{}'",
        summary,
        config.output_dir.display()
    );

    Ok(summary)
}
