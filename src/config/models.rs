use std::fmt;
use std::time::Duration;

use crate::api::models::RECORD_TYPE_A;

pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_IP_API_URL: &str = "https://api.ipify.org?format=text";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one run. Built once at startup and passed by reference.
#[derive(Clone)]
pub struct Config {
    pub api_token: String,
    pub zone_id: String,
    pub record_name: String,
    pub record_type: &'static str,
    pub api_base_url: String,
    pub ip_api_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(
        api_token: impl Into<String>,
        zone_id: impl Into<String>,
        record_name: impl Into<String>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            zone_id: zone_id.into(),
            record_name: record_name.into(),
            record_type: RECORD_TYPE_A,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            ip_api_url: DEFAULT_IP_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_ip_api_url(mut self, url: impl Into<String>) -> Self {
        self.ip_api_url = url.into();
        self
    }
}

// The token stays out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("record_name", &self.record_name)
            .field("record_type", &self.record_type)
            .field("api_base_url", &self.api_base_url)
            .field("ip_api_url", &self.ip_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
