//! Data loader for the scholar document.
//!
//! Every failure mode (transport error, non-success status, malformed body,
//! missing file) collapses to `None`; callers render the same "no data" state
//! regardless of cause. Causes are only visible at DEBUG level.

use log::debug;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

use crate::common::ScholarDoc;

/// Create the HTTP client used for document fetches
pub fn create_client() -> reqwest::Result<Client> {
    Client::builder().build()
}

/// Fetch the scholar document from a URL, bypassing intermediary caches.
pub async fn fetch_document(client: &Client, url: &str, timeout: Option<Duration>) -> Option<ScholarDoc> {
    let mut req = client.get(url).header(CACHE_CONTROL, "no-cache");
    if let Some(t) = timeout {
        req = req.timeout(t);
    }

    let resp = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("Fetch failed for {}: {}", url, e);
            return None;
        }
    };

    if !resp.status().is_success() {
        debug!("Fetch for {} returned status {}", url, resp.status());
        return None;
    }

    match resp.json::<ScholarDoc>().await {
        Ok(doc) => Some(doc),
        Err(e) => {
            debug!("Malformed scholar document from {}: {}", url, e);
            None
        }
    }
}

/// Read the scholar document from a local file.
pub fn read_document<P: AsRef<Path>>(path: P) -> Option<ScholarDoc> {
    let path = path.as_ref();
    let body = match std::fs::read_to_string(path) {
        Ok(b) => b,
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&body) {
        Ok(doc) => Some(doc),
        Err(e) => {
            debug!("Malformed scholar document in {}: {}", path.display(), e);
            None
        }
    }
}

/// Load the document from a path or an http(s) URL.
pub fn load_document(source: &str) -> Option<ScholarDoc> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                debug!("Failed to create runtime: {}", e);
                return None;
            }
        };
        let client = match create_client() {
            Ok(c) => c,
            Err(e) => {
                debug!("Failed to create HTTP client: {}", e);
                return None;
            }
        };
        rt.block_on(fetch_document(&client, source, None))
    } else {
        read_document(source)
    }
}
