//! CycloneDX supplier record.

use serde::{Deserialize, Serialize};

/// A contact entry within a supplier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierContact {
    /// Contact name
    pub name: String,
    /// Contact email (always contains `@` when produced by this crate)
    pub email: String,
}

/// Supplier (publisher) information in CycloneDX shape.
///
/// Only populated fields are serialized; a record with nothing usable is
/// never written into the SBOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vec<SupplierContact>>,
    /// Up to three http(s) URLs, homepage first, in discovery order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<String>>,
}

impl Supplier {
    /// Fixed placeholder record for ecosystems without registry lookup.
    #[must_use]
    pub fn placeholder(name: &str, url: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            contact: None,
            url: Some(vec![url.to_string()]),
        }
    }

    /// True when no field carries data.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none() && self.url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_omitted() {
        let supplier = Supplier {
            name: Some("Alice".to_string()),
            contact: None,
            url: None,
        };
        let json = serde_json::to_string(&supplier).unwrap();
        assert_eq!(json, r#"{"name":"Alice"}"#);
    }

    #[test]
    fn test_field_order_matches_cyclonedx() {
        let supplier = Supplier {
            name: Some("Alice".to_string()),
            contact: Some(vec![SupplierContact {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }]),
            url: Some(vec!["http://x.test".to_string()]),
        };
        let json = serde_json::to_string(&supplier).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","contact":[{"name":"Alice","email":"alice@example.com"}],"url":["http://x.test"]}"#
        );
    }

    #[test]
    fn test_placeholder() {
        let supplier = Supplier::placeholder("npm Registry", "https://www.npmjs.com/");
        assert_eq!(supplier.name.as_deref(), Some("npm Registry"));
        assert!(supplier.contact.is_none());
        assert_eq!(
            supplier.url.as_deref(),
            Some(&["https://www.npmjs.com/".to_string()][..])
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Supplier::default().is_empty());
        assert!(!Supplier::placeholder("x", "https://x.test").is_empty());
    }
}
