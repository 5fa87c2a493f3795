//! File-id extraction and direct-download URL construction.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FetchError, Result};

/// Host serving direct downloads.
const DRIVE_HOST: &str = "https://drive.google.com";

static PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("valid path-id pattern"));

static QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([A-Za-z0-9_-]+)").expect("valid query-id pattern"));

/// A resolved share link: the extracted file id and the derived direct
/// download URL. Built once per resolution attempt, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolution {
    pub file_id: String,
    pub download_url: String,
}

/// Extracts the file id from a sharing URL and derives the download URL.
///
/// The `/d/<id>` path segment is tried first, then the `id=<id>` query
/// parameter. If neither matches the link is rejected and no network
/// request happens.
pub fn resolve_share_link(link: &str) -> Result<LinkResolution> {
    let file_id = PATH_ID
        .captures(link)
        .or_else(|| QUERY_ID.captures(link))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| FetchError::InvalidLink(link.to_string()))?;

    let download_url = format!("{DRIVE_HOST}/uc?export=download&id={file_id}");
    tracing::debug!(%file_id, "resolved share link");
    Ok(LinkResolution {
        file_id,
        download_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_path_form() {
        let resolution =
            resolve_share_link("https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing")
                .unwrap();
        assert_eq!(resolution.file_id, "1AbC_d-9");
        assert_eq!(
            resolution.download_url,
            "https://drive.google.com/uc?export=download&id=1AbC_d-9"
        );
    }

    #[test]
    fn falls_back_to_query_form() {
        let resolution = resolve_share_link("https://drive.google.com/open?id=XYZ123").unwrap();
        assert_eq!(resolution.file_id, "XYZ123");
    }

    #[test]
    fn path_form_wins_over_query_form() {
        let resolution =
            resolve_share_link("https://drive.google.com/file/d/AAA/view?id=BBB").unwrap();
        assert_eq!(resolution.file_id, "AAA");
    }

    #[test]
    fn rejects_links_without_an_id() {
        let err = resolve_share_link("https://drive.google.com/drive/folders/shared").unwrap_err();
        assert!(matches!(err, FetchError::InvalidLink(_)));
    }
}
