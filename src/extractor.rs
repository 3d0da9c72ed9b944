use scraper::{Html, Selector};
use std::collections::HashSet;

/// Element and attribute pair that may hold an image reference.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceAttribute {
    pub element: &'static str,
    pub attribute: &'static str,
    /// `srcset` style: comma separated `URL [descriptor]` entries.
    pub multi_value: bool,
}

const fn single(element: &'static str, attribute: &'static str) -> ReferenceAttribute {
    ReferenceAttribute {
        element,
        attribute,
        multi_value: false,
    }
}

const fn multi(element: &'static str, attribute: &'static str) -> ReferenceAttribute {
    ReferenceAttribute {
        element,
        attribute,
        multi_value: true,
    }
}

pub const REFERENCE_ATTRIBUTES: &[ReferenceAttribute] = &[
    single("img", "src"),
    single("img", "data-src"),
    single("img", "data-original"),
    multi("img", "srcset"),
    single("picture", "src"),
    single("picture", "data-src"),
    single("picture", "data-original"),
    multi("picture", "srcset"),
    single("source", "src"),
    single("source", "data-src"),
    single("source", "data-original"),
    multi("source", "srcset"),
];

/// Collects raw candidate references from `html`, deduplicated by exact value
/// and kept in the order they first appear in the document.
pub fn extract_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img, picture, source").expect("element selector");

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |candidate: &str| {
        if seen.insert(candidate.to_string()) {
            candidates.push(candidate.to_string());
        }
    };

    for element in document.select(&selector) {
        let tag = element.value();
        for rule in REFERENCE_ATTRIBUTES.iter().filter(|r| r.element == tag.name()) {
            let value = match tag.attr(rule.attribute) {
                Some(v) if !v.is_empty() => v,
                _ => continue,
            };

            if rule.multi_value {
                split_srcset(value).for_each(&mut push);
            } else {
                push(value);
            }
        }
    }

    candidates
}

/// URLs of a `srcset` value, descriptors dropped.
pub fn split_srcset(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .filter_map(|entry| entry.split_whitespace().next())
}
