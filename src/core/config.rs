use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub line_channel_access_token: String,
    pub line_channel_secret: String,
    pub imgbb_api_key: String,
    pub form_builder_url: String,
    pub participant_query_url: String,
    pub port: u16,
    /// Upper bound for every outbound HTTP call.
    pub outbound_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is the
    /// production caller; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| format!("{key}: environment variable not found"))
        };

        let form_builder_url = required("GOOGLE_SCRIPT_URL")?;
        url::Url::parse(&form_builder_url).map_err(|e| format!("GOOGLE_SCRIPT_URL: {e}"))?;
        let participant_query_url = required("GOOGLE_QUERY_URL")?;
        url::Url::parse(&participant_query_url).map_err(|e| format!("GOOGLE_QUERY_URL: {e}"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {e}"))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("OUTBOUND_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("OUTBOUND_TIMEOUT_SECS: {e}"))?,
            None => DEFAULT_OUTBOUND_TIMEOUT_SECS,
        };

        Ok(Self {
            line_channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            line_channel_secret: required("LINE_CHANNEL_SECRET")?,
            imgbb_api_key: required("IMGBB_API_KEY")?,
            form_builder_url,
            participant_query_url,
            port,
            outbound_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
