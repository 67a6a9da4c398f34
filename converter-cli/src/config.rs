//! Configuration loading from flags and environment.

use std::time::Duration;

use rates_client::DEFAULT_ENDPOINT;

/// Converter configuration.
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Builds configuration from raw values, as read by clap from flags or
    /// the `CONVERTER_API_URL`, `CONVERTER_API_KEY` and `CONVERTER_TIMEOUT_SECS`
    /// environment variables.
    pub fn from_values(
        api_url: Option<String>,
        api_key: Option<String>,
        timeout_secs: Option<&str>,
    ) -> anyhow::Result<Self> {
        let api_url = api_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("CONVERTER_API_KEY environment variable is required"))?;

        let timeout = timeout_secs.map(parse_timeout).transpose()?;

        Ok(Self {
            api_url,
            api_key,
            timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid timeout: {} (expected whole seconds)", raw))?;
    if secs == 0 {
        anyhow::bail!("Timeout must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}
