use log::debug;
use std::collections::HashSet;
use url::Url;

pub const SUPPORTED_EXTENSIONS: &[&str] = &[".webp", ".png", ".jpeg", ".jpg", ".gif"];

/// True when the lower-cased path ends in a supported extension. Query and
/// fragment are not looked at.
pub fn is_supported_image(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let path = url.path().to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Resolves every candidate against `base` and keeps the supported images.
/// Identical absolute URLs reached through different raw strings are kept
/// once.
pub fn resolve_images<S: AsRef<str>>(base: &Url, candidates: &[S]) -> Vec<Url> {
    let mut seen: HashSet<Url> = HashSet::new();
    let mut accepted = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let resolved = match base.join(candidate) {
            Ok(u) => u,
            Err(e) => {
                debug!("Skipping unresolvable reference {:?}: {}", candidate, e);
                continue;
            }
        };

        if !is_supported_image(&resolved) {
            debug!("Skipping unsupported reference {}", resolved);
            continue;
        }

        if seen.insert(resolved.clone()) {
            accepted.push(resolved);
        }
    }

    accepted
}
