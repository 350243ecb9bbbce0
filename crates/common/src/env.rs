//! Environment/runtime helpers
//!
//! Sanity checks on optional directories expected at startup.

use tracing::warn;

/// Returns whether the documentation viewer directory exists; warns if not.
pub async fn docs_dir_available(ui_dir: &str) -> bool {
    match tokio::fs::metadata(ui_dir).await {
        Ok(meta) if meta.is_dir() => true,
        _ => {
            warn!(%ui_dir, "api docs viewer directory not found; /apidocs/ will not be served");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn detects_existing_and_missing_dirs() {
        let tmp = std::env::temp_dir();
        assert!(docs_dir_available(tmp.to_str().unwrap()).await);
        assert!(!docs_dir_available("/nonexistent-docs-dir-for-tests").await);
    }
}
