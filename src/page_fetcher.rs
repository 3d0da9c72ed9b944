use crate::{configuration::FetchConfig, error::Error, models::TargetPage};
use log::{debug, info};
use reqwest::Client;

/// One client per run; the User-Agent is the only header we ever send.
pub fn build_client(config: &FetchConfig) -> Result<Client, Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(Error::HttpClient)
}

/// GETs the target page. Redirects are followed and the landed URL is kept
/// as the page URL.
pub async fn fetch_page(client: &Client, config: &FetchConfig) -> Result<TargetPage, Error> {
    let url = &config.target_url;
    info!("Fetching page: {}", url);

    let page_error = |source| Error::PageFetch {
        url: url.clone(),
        source,
    };

    let response = client
        .get(url.clone())
        .timeout(config.page_timeout)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(page_error)?;

    let landed = response.url().clone();
    if &landed != url {
        debug!("Redirected to {}", landed);
    }

    let html = response.bytes().await.map_err(page_error)?;
    debug!("Page is {} bytes", html.len());

    Ok(TargetPage {
        url: landed,
        html: html.to_vec(),
    })
}
