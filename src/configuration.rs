use crate::error::Error;
use config::{Config, ConfigError, Environment};
use resolve_path::PathResolveExt;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "images";
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_directory: String,
    pub delay_ms: u64,
    pub page_timeout_secs: u64,
    pub image_timeout_secs: u64,
    pub user_agent: String,
}

impl Settings {
    /// Layers built-in defaults, an optional config file and `PAGE_IMAGES_*`
    /// environment variables, in that order.
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("output_directory", DEFAULT_OUTPUT_DIRECTORY)?
            .set_default("delay_ms", DEFAULT_DELAY_MS as i64)?
            .set_default("page_timeout_secs", DEFAULT_PAGE_TIMEOUT_SECS as i64)?
            .set_default("image_timeout_secs", DEFAULT_IMAGE_TIMEOUT_SECS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(config::File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("PAGE_IMAGES").try_parsing(true))
            .build()?;
        builder.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_directory: DEFAULT_OUTPUT_DIRECTORY.into(),
            delay_ms: DEFAULT_DELAY_MS,
            page_timeout_secs: DEFAULT_PAGE_TIMEOUT_SECS,
            image_timeout_secs: DEFAULT_IMAGE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

/// Everything a single run needs. Built once by the caller and passed into
/// [`crate::run::run`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub target_url: Url,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub page_timeout: Duration,
    pub image_timeout: Duration,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn new(target_url: Url, output_dir: &str, settings: &Settings) -> Self {
        FetchConfig {
            target_url,
            output_dir: output_dir.resolve().into_owned(),
            delay: Duration::from_millis(settings.delay_ms),
            page_timeout: Duration::from_secs(settings.page_timeout_secs),
            image_timeout: Duration::from_secs(settings.image_timeout_secs),
            user_agent: settings.user_agent.clone(),
        }
    }
}

/// Trims user input and adds `https://` when no http(s) scheme is present.
pub fn normalize_target_url(input: &str) -> Result<Url, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("no URL given".into()));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| Error::InvalidUrl(format!("{trimmed}: {e}")))?;
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("{trimmed}: missing host")));
    }
    Ok(url)
}
