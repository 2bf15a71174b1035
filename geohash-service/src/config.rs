//! Service configuration loaded from environment variables.

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Precision used by `/encode` when the request doesn't specify one.
pub const DEFAULT_PRECISION: usize = 12;

/// Largest precision accepted by `/encode` unless configured lower.
pub const DEFAULT_MAX_PRECISION: usize = geohash::MAX_PRECISION;

/// Runtime settings for the geohash service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server port.
    pub port: u16,
    /// Precision used when a request omits it.
    pub default_precision: usize,
    /// Upper bound on requested precision.
    pub max_precision: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_precision: DEFAULT_PRECISION,
            max_precision: DEFAULT_MAX_PRECISION,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GEOHASH_PORT` | HTTP server port | 8080 |
    /// | `GEOHASH_DEFAULT_PRECISION` | Precision when `/encode` omits it | 12 |
    /// | `GEOHASH_MAX_PRECISION` | Largest precision `/encode` accepts | 22 |
    ///
    /// Unparseable values are logged and replaced by their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "GEOHASH_PORT", defaults.port);
        let mut max_precision =
            parse_var(&lookup, "GEOHASH_MAX_PRECISION", defaults.max_precision);

        if max_precision == 0 || max_precision > geohash::MAX_PRECISION {
            tracing::warn!(
                max_precision,
                limit = geohash::MAX_PRECISION,
                "GEOHASH_MAX_PRECISION out of range, clamping"
            );
            max_precision = max_precision.clamp(1, geohash::MAX_PRECISION);
        }
        let mut default_precision =
            parse_var(&lookup, "GEOHASH_DEFAULT_PRECISION", defaults.default_precision);

        if default_precision == 0 || default_precision > max_precision {
            tracing::warn!(
                default_precision,
                max_precision,
                "GEOHASH_DEFAULT_PRECISION out of range, clamping"
            );
            default_precision = default_precision.clamp(1, max_precision);
        }

        Self {
            port,
            default_precision,
            max_precision,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(variable = key, value = %raw, "Invalid value, using default");
                default
            }
        },
        None => default,
    }
}
