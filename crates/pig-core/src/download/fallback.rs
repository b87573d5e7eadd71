//! System-browser fallback for failed downloads.

use std::process::Command;

/// Opens `url` in the default browser, best effort. Tries `xdg-open`
/// first, then `open`. Returns false when neither launcher worked; the
/// caller decides how to report that.
pub fn open_in_browser(url: &str) -> bool {
    for launcher in ["xdg-open", "open"] {
        match Command::new(launcher).arg(url).status() {
            Ok(status) if status.success() => {
                tracing::info!("opened {url} via {launcher}");
                return true;
            }
            Ok(status) => tracing::debug!("{launcher} exited with {status}"),
            Err(err) => tracing::debug!("{launcher} unavailable: {err}"),
        }
    }
    false
}
