use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every variable has a default so the service starts with an empty
/// environment. The .env file is loaded at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on (DOCSENSE_PORT)
    pub port: u16,
    /// Bind address (DOCSENSE_BIND)
    pub bind: String,
    /// Debug flag — raises the default log filter to debug (DOCSENSE_DEBUG)
    pub debug: bool,
    /// Upper bound on the request body, and therefore on upload size
    /// (DOCSENSE_MAX_UPLOAD_BYTES)
    pub max_upload_bytes: usize,
    /// Number of topics the topic extractor produces (DOCSENSE_NUM_TOPICS)
    pub num_topics: usize,
    /// Terms returned per topic (DOCSENSE_WORDS_PER_TOPIC)
    pub words_per_topic: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind: "0.0.0.0".to_string(),
            debug: false,
            max_upload_bytes: 10 * 1024 * 1024,
            num_topics: 2,
            words_per_topic: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. A variable that is set but unparseable
    /// is an error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        let defaults = Config::default();

        Ok(Self {
            port: parse_env("DOCSENSE_PORT", defaults.port)?,
            bind: env::var("DOCSENSE_BIND").unwrap_or(defaults.bind),
            debug: matches!(
                env::var("DOCSENSE_DEBUG").as_deref(),
                Ok("1") | Ok("true") | Ok("True") | Ok("TRUE")
            ),
            max_upload_bytes: parse_env("DOCSENSE_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            num_topics: parse_env("DOCSENSE_NUM_TOPICS", defaults.num_topics)?,
            words_per_topic: parse_env("DOCSENSE_WORDS_PER_TOPIC", defaults.words_per_topic)?,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw} is not valid: {e}")),
        Err(_) => Ok(default),
    }
}
