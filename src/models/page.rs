use url::Url;

/// The fetched page. `url` is where the request landed after redirects and is
/// the base for resolving relative references.
#[derive(Debug, Clone)]
pub struct TargetPage {
    pub url: Url,
    pub html: Vec<u8>,
}

impl TargetPage {
    pub fn html_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.html)
    }
}
