//! Application configuration loaded from environment variables.

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DATABASE_URL`: PostgreSQL connection string; unset keeps auctions in memory
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `5`)
/// - `SELLER_HEADER`: request header naming the seller (default: `"x-seller"`)
/// - `DEFAULT_SELLER`: seller used when the header is absent (default: `"test"`,
///   an empty value disables the fallback)
/// - `SEED_DATA`: populate an empty store with sample auctions (default: `true`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub seller_header: String,
    pub default_seller: Option<String>,
    pub seed_data: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            seller_header: lookup("SELLER_HEADER").unwrap_or(defaults.seller_header),
            default_seller: match lookup("DEFAULT_SELLER") {
                Some(seller) if seller.is_empty() => None,
                Some(seller) => Some(seller),
                None => defaults.default_seller,
            },
            seed_data: lookup("SEED_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_data),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            database_url: None,
            database_max_connections: 5,
            seller_header: "x-seller".to_string(),
            default_seller: Some("test".to_string()),
            seed_data: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
