//! Failure capture.
//!
//! On an assertion mismatch the runner persists a screenshot named after
//! the scenario tag and emits one error-level log record. Both are
//! best-effort: a secondary I/O failure is logged at warn level and must
//! never mask the primary failure signal.

use crate::browser::Page;
use std::path::Path;
use tracing::{error, warn};

/// Persist `<tag>.png` under `dir` and log the failure message.
///
/// The directory is created on demand and accumulates artifacts across
/// runs. Never returns an error and never panics.
pub async fn capture_failure(page: &Page, dir: &Path, tag: &str, message: &str) {
    error!(scenario = tag, "{message}");

    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        warn!(scenario = tag, error = %e, "could not create screenshot directory");
        return;
    }

    let path = dir.join(format!("{tag}.png"));
    match page.screenshot().await {
        Ok(bytes) => {
            if let Err(e) = tokio::fs::write(&path, bytes).await {
                warn!(scenario = tag, path = %path.display(), error = %e, "could not write screenshot");
            }
        }
        Err(e) => {
            warn!(scenario = tag, error = %e, "could not capture screenshot");
        }
    }
}
