//! Pure helpers over the serialized document representation.
//!
//! These operate on the serialized content string rather than live editor
//! nodes, keeping the rewrite step independent of any editing engine's
//! internal document model.

use crate::{LocalReference, UploadMapping};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static LOCAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"local:[A-Za-z0-9-]+").expect("valid local id pattern"));

/// Markup inserted into the document for a freshly attached image.
pub fn image_embed(reference: &LocalReference) -> String {
    format!("<img src=\"{}\">", reference.id())
}

/// Extract every local reference id embedded in the serialized content.
///
/// Duplicate embeddings collapse to one id; the result is the authoritative
/// input for a reconciliation pass.
pub fn embedded_local_ids(content: &str) -> HashSet<String> {
    LOCAL_ID
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Replace every occurrence of each mapped local reference with its remote URL.
///
/// Substitution is literal and position-independent: an asset embedded twice
/// is replaced at both sites. Unmapped (failed) references are left untouched,
/// and an empty mapping returns the content unchanged.
pub fn rewrite(content: &str, mapping: &UploadMapping) -> String {
    let mut rewritten = content.to_string();
    for (local_id, remote_url) in mapping.iter() {
        rewritten = rewritten.replace(local_id, remote_url);
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_replaces_all_occurrences() {
        let content = "<img src='local:AAA'> text <img src='local:AAA'>";
        let mut mapping = UploadMapping::new();
        mapping.insert("local:AAA", "https://cdn/x.png");

        let rewritten = rewrite(content, &mapping);
        assert_eq!(
            rewritten,
            "<img src='https://cdn/x.png'> text <img src='https://cdn/x.png'>"
        );
    }

    #[test]
    fn test_rewrite_leaves_unmapped_references() {
        let content = "<img src='local:AAA'><img src='local:BBB'>";
        let mut mapping = UploadMapping::new();
        mapping.insert("local:AAA", "https://cdn/a.png");

        let rewritten = rewrite(content, &mapping);
        assert!(rewritten.contains("https://cdn/a.png"));
        assert!(rewritten.contains("local:BBB"));
    }

    #[test]
    fn test_rewrite_noop_on_empty_mapping() {
        let content = "<p>no uploads succeeded</p><img src='local:AAA'>";
        let rewritten = rewrite(content, &UploadMapping::new());
        assert_eq!(rewritten, content);
    }

    #[test]
    fn test_embedded_ids_deduplicate() {
        let content = "<img src='local:AAA'> <img src='local:BBB'> <img src='local:AAA'>";
        let ids = embedded_local_ids(content);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("local:AAA"));
        assert!(ids.contains("local:BBB"));
    }

    #[test]
    fn test_embedded_ids_ignores_remote_urls() {
        let content = "<img src='https://cdn/x.png'>";
        assert!(embedded_local_ids(content).is_empty());
    }

    #[test]
    fn test_image_embed_round_trips_through_extraction() {
        let reference = LocalReference::mint("image/png", 16);
        let markup = image_embed(&reference);
        let ids = embedded_local_ids(&markup);
        assert!(ids.contains(reference.id()));
    }
}
