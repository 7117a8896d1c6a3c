//! Site base URL parsing and absolute URL construction.
//!
//! Canonical links, breadcrumb `item` URLs and sitemap entries are all built
//! from one normalized origin so the three always agree.

use std::fmt;
use url::Url;

/// Errors that can occur while parsing the site base URL.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Base URL must not contain a path, got '{0}'")]
    UnexpectedPath(String),

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalized site origin, e.g. `https://www.example.com`, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parses and normalizes a site origin.
    ///
    /// # Normalization Rules
    ///
    /// 1. **Protocol**: Only HTTP and HTTPS are allowed
    /// 2. **Hostname**: Converted to lowercase
    /// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
    /// 4. **Query and fragment**: Dropped
    /// 5. **Path**: Must be empty or `/`
    ///
    /// # Errors
    ///
    /// Returns [`BaseUrlError::InvalidFormat`] for malformed URLs.
    /// Returns [`BaseUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
    /// Returns [`BaseUrlError::UnexpectedPath`] when the site is not hosted at the root.
    pub fn parse(input: &str) -> Result<Self, BaseUrlError> {
        let mut url =
            Url::parse(input.trim()).map_err(|e| BaseUrlError::InvalidFormat(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(BaseUrlError::UnsupportedProtocol),
        }

        if url.path() != "/" {
            return Err(BaseUrlError::UnexpectedPath(url.path().to_string()));
        }

        if let Some(host) = url.host_str() {
            let host_lowercase = host.to_ascii_lowercase();
            url.set_host(Some(&host_lowercase)).map_err(|_| {
                BaseUrlError::NormalizationFailed("Failed to set normalized host".to_string())
            })?;
        }

        url.set_fragment(None);
        url.set_query(None);

        let is_default_port = matches!(
            (url.scheme(), url.port()),
            ("http", Some(80)) | ("https", Some(443))
        );
        if is_default_port {
            url.set_port(None).map_err(|_| {
                BaseUrlError::NormalizationFailed("Failed to remove default port".to_string())
            })?;
        }

        Ok(Self(url.as_str().trim_end_matches('/').to_string()))
    }

    /// Joins a site path (`/`, `/services/roofing`) onto the origin.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_https() {
        let base = BaseUrl::parse("https://www.example.com").unwrap();
        assert_eq!(base.as_str(), "https://www.example.com");
    }

    #[test]
    fn test_parse_strips_trailing_slash() {
        let base = BaseUrl::parse("https://www.example.com/").unwrap();
        assert_eq!(base.as_str(), "https://www.example.com");
    }

    #[test]
    fn test_parse_uppercase_host() {
        let base = BaseUrl::parse("HTTPS://WWW.EXAMPLE.COM").unwrap();
        assert_eq!(base.as_str(), "https://www.example.com");
    }

    #[test]
    fn test_parse_remove_default_port() {
        let base = BaseUrl::parse("https://example.com:443").unwrap();
        assert_eq!(base.as_str(), "https://example.com");
    }

    #[test]
    fn test_parse_keep_custom_port() {
        let base = BaseUrl::parse("http://localhost:3000").unwrap();
        assert_eq!(base.as_str(), "http://localhost:3000");
    }

    #[test]
    fn test_parse_drops_query_and_fragment() {
        let base = BaseUrl::parse("https://example.com/?utm=x#top").unwrap();
        assert_eq!(base.as_str(), "https://example.com");
    }

    #[test]
    fn test_parse_rejects_path() {
        let result = BaseUrl::parse("https://example.com/site");
        assert!(matches!(result, Err(BaseUrlError::UnexpectedPath(_))));
    }

    #[test]
    fn test_parse_rejects_ftp() {
        let result = BaseUrl::parse("ftp://example.com");
        assert!(matches!(result, Err(BaseUrlError::UnsupportedProtocol)));
    }

    #[test]
    fn test_parse_invalid() {
        let result = BaseUrl::parse("example.com");
        assert!(matches!(result, Err(BaseUrlError::InvalidFormat(_))));
    }

    #[test]
    fn test_absolute() {
        let base = BaseUrl::parse("https://example.com").unwrap();

        assert_eq!(base.absolute("/"), "https://example.com/");
        assert_eq!(
            base.absolute("/services/roofing"),
            "https://example.com/services/roofing"
        );
        assert_eq!(base.absolute("faq"), "https://example.com/faq");
    }
}
