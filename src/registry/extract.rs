//! Supplier extraction from PyPI metadata documents.

use crate::model::{Supplier, SupplierContact};
use serde_json::Value;

/// Candidate keys within `project_urls` worth collecting, compared
/// case-insensitively. Other keys are dropped even when the URL itself is
/// valid and unique.
const URL_KEYS: [&str; 3] = ["homepage", "repository", "source"];

/// Maximum URLs carried into a supplier record.
const MAX_URLS: usize = 3;

/// Read a string field from the `info` object, trimmed, defaulting to empty.
fn info_str<'a>(info: &'a Value, key: &str) -> &'a str {
    info.get(key).and_then(Value::as_str).unwrap_or("").trim()
}

/// Extract a supplier record from a PyPI metadata document.
///
/// Maintainer data wins over author data for both name and email; the email
/// is only carried when it contains `@`. URLs start with `home_page` and are
/// topped up from `project_urls` in document order, capped at three.
///
/// Returns `None` when neither a name nor any URL was found.
#[must_use]
pub fn extract_supplier(meta: &Value) -> Option<Supplier> {
    let info = meta.get("info")?;
    if !info.as_object().is_some_and(|obj| !obj.is_empty()) {
        return None;
    }

    let maintainer = info_str(info, "maintainer");
    let maintainer_email = info_str(info, "maintainer_email");
    let author = info_str(info, "author");
    let author_email = info_str(info, "author_email");

    let name = if maintainer.is_empty() { author } else { maintainer };
    let email = if maintainer_email.is_empty() {
        author_email
    } else {
        maintainer_email
    };

    let mut supplier = Supplier::default();
    if !name.is_empty() {
        supplier.name = Some(name.to_string());
        if !email.is_empty() && email.contains('@') {
            supplier.contact = Some(vec![SupplierContact {
                name: name.to_string(),
                email: email.to_string(),
            }]);
        }
    }

    let mut urls: Vec<String> = Vec::new();
    let homepage = info_str(info, "home_page");
    if homepage.starts_with("http") {
        urls.push(homepage.to_string());
    }

    if let Some(project_urls) = info.get("project_urls").and_then(Value::as_object) {
        for (key, value) in project_urls {
            let Some(url) = value.as_str() else { continue };
            if url.starts_with("http")
                && !urls.iter().any(|u| u == url)
                && URL_KEYS.contains(&key.to_lowercase().as_str())
            {
                urls.push(url.to_string());
            }
        }
    }
    if !urls.is_empty() {
        urls.truncate(MAX_URLS);
        supplier.url = Some(urls);
    }

    if supplier.is_empty() {
        None
    } else {
        Some(supplier)
    }
}
