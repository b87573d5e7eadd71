//! Best-effort image download with browser-open fallback.
//!
//! One GET attempt per call: bytes are fetched with curl, staged to a
//! `.part` file next to the destination and renamed into place on success.
//! The staged file is always removed on failure, so a broken download never
//! leaves a partial file behind. Failures in the `download_or_open` entry
//! point are absorbed: logged, then the URL is handed to the system browser
//! instead.
//!
//! Blocking; call from `spawn_blocking` if used from async code.

mod fallback;

pub use fallback::open_in_browser;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Error from a single fetch attempt. Classified so the fallback path can
/// log a precise cause before degrading.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    Curl(curl::Error),
    /// Response completed with a non-2xx status.
    Http(u32),
    /// Writing the fetched bytes to disk failed.
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Io(e) => write!(f, "io: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Io(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

/// Fetches the bytes at `url` with a single GET. Follows redirects and
/// requires a 2xx response. No retry and no overall timeout beyond curl's
/// own failure signaling: the contract is one best-effort attempt.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

/// A download that completed and was renamed into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Removes the staged `.part` file on drop unless the rename disarmed it.
struct StageGuard {
    path: PathBuf,
    armed: bool,
}

impl StageGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for StageGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Fetches `url` and saves it under `dir` as `filename`, staging through
/// `{filename}.part` and renaming on success.
pub fn save_image(url: &str, dir: &Path, filename: &str) -> Result<SavedImage, FetchError> {
    let body = fetch_bytes(url)?;

    fs::create_dir_all(dir)?;
    let staged = dir.join(format!("{filename}.part"));
    let final_path = dir.join(filename);

    let mut guard = StageGuard::new(staged.clone());
    fs::write(&staged, &body)?;
    fs::rename(&staged, &final_path)?;
    guard.disarm();

    Ok(SavedImage {
        path: final_path,
        bytes: body.len() as u64,
    })
}

/// Outcome of a best-effort download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Bytes were fetched and written into place.
    Saved(SavedImage),
    /// The fetch or save failed; the URL was handed to the system browser
    /// instead. `opened` is false when that also failed.
    OpenedInBrowser { opened: bool },
}

/// Downloads `url` into `dir/filename`, degrading to a browser open on any
/// failure. Never returns an error: failures are logged and absorbed, so
/// the action stays usable afterwards.
pub fn download_or_open(url: &str, dir: &Path, filename: &str) -> DownloadOutcome {
    download_or_open_with(url, dir, filename, open_in_browser)
}

/// Like [`download_or_open`], with an injectable fallback opener for tests.
pub fn download_or_open_with(
    url: &str,
    dir: &Path,
    filename: &str,
    opener: impl FnOnce(&str) -> bool,
) -> DownloadOutcome {
    match save_image(url, dir, filename) {
        Ok(saved) => {
            tracing::info!("saved {} ({} bytes)", saved.path.display(), saved.bytes);
            DownloadOutcome::Saved(saved)
        }
        Err(err) => {
            tracing::warn!("download of {url} failed ({err}); opening in browser instead");
            DownloadOutcome::OpenedInBrowser {
                opened: opener(url),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_guard_removes_file_when_armed() {
        let dir = tempfile::tempdir().unwrap();
        let staged = dir.path().join("image.jpg.part");
        fs::write(&staged, b"partial").unwrap();
        drop(StageGuard::new(staged.clone()));
        assert!(!staged.exists());
    }

    #[test]
    fn stage_guard_keeps_file_when_disarmed() {
        let dir = tempfile::tempdir().unwrap();
        let staged = dir.path().join("image.jpg.part");
        fs::write(&staged, b"complete").unwrap();
        let mut guard = StageGuard::new(staged.clone());
        guard.disarm();
        drop(guard);
        assert!(staged.exists());
    }

    #[test]
    fn fetch_error_display_names_http_status() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
    }
}
