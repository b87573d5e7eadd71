//! Integration tests: downloader against a local HTTP server.
//!
//! Starts a minimal server, downloads from it, and asserts the saved file
//! matches the served body; failure cases must degrade to the browser-open
//! fallback without propagating an error or leaving partial files.

mod common;

use pig_core::download::{
    download_or_open_with, fetch_bytes, save_image, DownloadOutcome, FetchError,
};
use tempfile::tempdir;

/// A few bytes that look vaguely like a JPEG header.
fn image_body() -> Vec<u8> {
    let mut body = vec![0xFF, 0xD8, 0xFF, 0xE0];
    body.extend((0u8..200).cycle().take(8 * 1024));
    body
}

#[test]
fn save_image_writes_file_and_cleans_staging() {
    let body = image_body();
    let url = common::image_server::start(body.clone());
    let dir = tempdir().unwrap();

    let saved = save_image(&url, dir.path(), "placeholder-400x300.jpg").unwrap();

    assert_eq!(saved.path, dir.path().join("placeholder-400x300.jpg"));
    assert_eq!(saved.bytes, body.len() as u64);
    assert_eq!(std::fs::read(&saved.path).unwrap(), body);
    assert!(!dir.path().join("placeholder-400x300.jpg.part").exists());
}

#[test]
fn fetch_bytes_rejects_non_2xx() {
    let url = common::image_server::start_with_status(b"gone".to_vec(), "404 Not Found");
    match fetch_bytes(&url) {
        Err(FetchError::Http(404)) => {}
        other => panic!("expected HTTP 404 error, got {other:?}"),
    }
}

#[test]
fn download_falls_back_on_http_error() {
    let url = common::image_server::start_with_status(Vec::new(), "500 Internal Server Error");
    let dir = tempdir().unwrap();

    let mut opened_with = None;
    let outcome = download_or_open_with(&url, dir.path(), "placeholder-400x300.jpg", |u| {
        opened_with = Some(u.to_string());
        false
    });

    assert_eq!(outcome, DownloadOutcome::OpenedInBrowser { opened: false });
    assert_eq!(opened_with.as_deref(), Some(url.as_str()));
    // Nothing was written: no final file, no leftover staging file.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn download_falls_back_on_unreachable_host() {
    // Port 1 is essentially never listening; curl fails to connect.
    let dir = tempdir().unwrap();

    let mut invoked = false;
    let outcome =
        download_or_open_with("http://127.0.0.1:1/", dir.path(), "image.jpg", |_| {
            invoked = true;
            true
        });

    assert_eq!(outcome, DownloadOutcome::OpenedInBrowser { opened: true });
    assert!(invoked);
}

#[test]
fn successful_download_never_invokes_fallback() {
    let url = common::image_server::start(image_body());
    let dir = tempdir().unwrap();

    let outcome = download_or_open_with(&url, dir.path(), "image.jpg", |_| {
        panic!("fallback must not run on success")
    });

    match outcome {
        DownloadOutcome::Saved(saved) => assert!(saved.path.exists()),
        other => panic!("expected Saved, got {other:?}"),
    }
}

#[test]
fn save_image_creates_missing_directories() {
    let url = common::image_server::start(image_body());
    let dir = tempdir().unwrap();
    let nested = dir.path().join("downloads/images");

    let saved = save_image(&url, &nested, "image.jpg").unwrap();
    assert!(saved.path.starts_with(&nested));
    assert!(saved.path.exists());
}
