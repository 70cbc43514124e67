//! Package ecosystem detection from PURLs.

/// Package ecosystem, derived from a PURL's type segment.
///
/// Adding registry support for another ecosystem means extending this enum
/// and its handler in [`crate::resolve`], not editing string checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// Python Package Index (`pkg:pypi/...`) - full registry lookup
    PyPi,
    /// npm registry (`pkg:npm/...`) - static placeholder supplier
    Npm,
    /// Maven Central (`pkg:maven/...`) - static placeholder supplier
    Maven,
    /// Anything else; no supplier derivation
    Unsupported,
}

impl Ecosystem {
    /// Detect the ecosystem from a PURL string.
    ///
    /// A string without a `pkg:` prefix or with an unknown type segment maps
    /// to [`Ecosystem::Unsupported`].
    #[must_use]
    pub fn detect(purl: &str) -> Self {
        let Some(purl_type) = purl
            .trim()
            .strip_prefix("pkg:")
            .and_then(|rest| rest.split('/').next())
        else {
            return Self::Unsupported;
        };

        match purl_type {
            "pypi" => Self::PyPi,
            "npm" => Self::Npm,
            "maven" => Self::Maven,
            _ => Self::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_ecosystems() {
        assert_eq!(Ecosystem::detect("pkg:pypi/requests@2.31.0"), Ecosystem::PyPi);
        assert_eq!(Ecosystem::detect("pkg:npm/lodash@4.17.21"), Ecosystem::Npm);
        assert_eq!(
            Ecosystem::detect("pkg:maven/org.apache.commons/commons-lang3@3.12.0"),
            Ecosystem::Maven
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(Ecosystem::detect("pkg:cargo/serde@1.0"), Ecosystem::Unsupported);
        assert_eq!(Ecosystem::detect("not-a-purl"), Ecosystem::Unsupported);
        assert_eq!(Ecosystem::detect(""), Ecosystem::Unsupported);
    }

    #[test]
    fn test_detect_tolerates_whitespace() {
        assert_eq!(Ecosystem::detect("  pkg:pypi/requests"), Ecosystem::PyPi);
    }
}
