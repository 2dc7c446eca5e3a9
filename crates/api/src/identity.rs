//! Resolution of the seller behind a request.

use axum::http::HeaderMap;
use axum::http::header::{HeaderName, InvalidHeaderName};

use crate::config::Config;

/// Resolves the identity that creates an auction.
///
/// Handlers receive the seller from this collaborator and pass it to the
/// service explicitly; nothing downstream reads identity from ambient state.
pub trait SellerResolver: Send + Sync {
    /// Returns the seller for a request, or None if it cannot be determined.
    fn resolve(&self, headers: &HeaderMap) -> Option<String>;
}

/// Reads the seller from a request header, with an optional fallback.
#[derive(Debug, Clone)]
pub struct HeaderSellerResolver {
    header: HeaderName,
    fallback: Option<String>,
}

impl HeaderSellerResolver {
    pub fn new(header: HeaderName, fallback: Option<String>) -> Self {
        Self { header, fallback }
    }

    /// Builds the resolver from `SELLER_HEADER` and `DEFAULT_SELLER`.
    pub fn from_config(config: &Config) -> Result<Self, InvalidHeaderName> {
        let header = HeaderName::from_bytes(config.seller_header.as_bytes())?;
        Ok(Self::new(header, config.default_seller.clone()))
    }
}

impl SellerResolver for HeaderSellerResolver {
    fn resolve(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get(&self.header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|seller| !seller.is_empty())
            .map(String::from)
            .or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn resolver(fallback: Option<&str>) -> HeaderSellerResolver {
        HeaderSellerResolver::new(
            HeaderName::from_static("x-seller"),
            fallback.map(String::from),
        )
    }

    #[test]
    fn test_header_wins_over_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-seller", HeaderValue::from_static("alice"));
        assert_eq!(
            resolver(Some("test")).resolve(&headers).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn test_blank_header_uses_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-seller", HeaderValue::from_static("   "));
        assert_eq!(
            resolver(Some("test")).resolve(&headers).as_deref(),
            Some("test")
        );
    }

    #[test]
    fn test_no_header_and_no_fallback() {
        assert!(resolver(None).resolve(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            seller_header: "X-User-Name".to_string(),
            default_seller: None,
            ..Config::default()
        };
        let resolver = HeaderSellerResolver::from_config(&config).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("x-user-name", HeaderValue::from_static("bob"));
        assert_eq!(resolver.resolve(&headers).as_deref(), Some("bob"));
    }

    #[test]
    fn test_from_config_rejects_invalid_header() {
        let config = Config {
            seller_header: "not a header".to_string(),
            ..Config::default()
        };
        assert!(HeaderSellerResolver::from_config(&config).is_err());
    }
}
