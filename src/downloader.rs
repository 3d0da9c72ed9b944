use crate::{configuration::FetchConfig, error::ImageError, models::DownloadResult};
use log::{debug, error, info};
use reqwest::{header::CONTENT_TYPE, Client};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};
use tokio::time::sleep;
use url::Url;

/// Downloads `urls` one after another into `config.output_dir`. A failed image
/// is recorded and the loop moves on. The configured delay follows every
/// attempt.
pub async fn download_all(
    client: &Client,
    urls: &[Url],
    config: &FetchConfig,
) -> Vec<DownloadResult> {
    let total = urls.len();
    let mut results = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        let index = i + 1;
        info!("[{}/{}] Downloading: {}", index, total, url);

        let result = match download_one(client, url, index, config).await {
            Ok(path) => {
                info!("Saved: {}", path.display());
                DownloadResult::Saved {
                    url: url.clone(),
                    path,
                }
            }
            Err(e) => {
                error!("Failed to download {}: {}", url, e);
                DownloadResult::Failed {
                    url: url.clone(),
                    error: e.to_string(),
                }
            }
        };
        results.push(result);

        sleep(config.delay).await;
    }

    results
}

async fn download_one(
    client: &Client,
    url: &Url,
    index: usize,
    config: &FetchConfig,
) -> Result<PathBuf, ImageError> {
    let response = client
        .get(url.clone())
        .timeout(config.image_timeout)
        .send()
        .await?
        .error_for_status()?;

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();
    let bytes = response.bytes().await?;

    let file_name = file_name_for(url, index, &content_type);
    let path = unique_path(&config.output_dir, &file_name);
    debug!("Writing {} bytes to {}", bytes.len(), path.display());

    write_new_file(&path, &bytes).map_err(|source| ImageError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Last path segment of `url`, or `image_{index}{ext}` when that segment has
/// no extension.
pub fn file_name_for(url: &Url, index: usize, content_type: &str) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(sanitize_name)
        .unwrap_or_default();

    if segment.is_empty() || !segment.contains('.') {
        format!("image_{}{}", index, extension_for(content_type))
    } else {
        segment
    }
}

pub fn extension_for(content_type: &str) -> &'static str {
    if content_type.contains("webp") {
        ".webp"
    } else if content_type.contains("png") {
        ".png"
    } else {
        ".jpg"
    }
}

fn sanitize_name(s: &str) -> String {
    s.replace([':', '/', '\\'], "").trim().to_string()
}

/// First of `name.ext`, `name_1.ext`, `name_2.ext`, ... that does not exist
/// in `dir` right now.
pub fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let original = Path::new(file_name);
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = original.extension().map(|e| e.to_string_lossy().into_owned());

    let mut counter = 1;
    loop {
        let name = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

// create_new so a file that appeared after the existence check is never truncated
fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}
