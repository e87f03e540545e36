pub mod models;

pub use models::Config;

use crate::error::{Error, Result};

pub const ENV_API_TOKEN: &str = "CF_API_TOKEN";
pub const ENV_ZONE_ID: &str = "CF_ZONE_ID";
pub const ENV_RECORD_NAME: &str = "CF_RECORD_NAME";
pub const ENV_API_BASE_URL: &str = "CF_API_BASE_URL";
pub const ENV_IP_API: &str = "DDNS_IP_API";

impl Config {
    /// Builds a config from any variable source. Empty values count as
    /// missing, and every missing name is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_token = get(ENV_API_TOKEN);
        let zone_id = get(ENV_ZONE_ID);
        let record_name = get(ENV_RECORD_NAME);

        let (api_token, zone_id, record_name) = match (api_token, zone_id, record_name) {
            (Some(token), Some(zone), Some(name)) => (token, zone, name),
            (token, zone, name) => {
                let missing = [
                    (ENV_API_TOKEN, token.is_none()),
                    (ENV_ZONE_ID, zone.is_none()),
                    (ENV_RECORD_NAME, name.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();
                return Err(Error::Config { missing });
            }
        };

        let mut config = Config::new(api_token, zone_id, record_name);
        if let Some(url) = get(ENV_API_BASE_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(url) = get(ENV_IP_API) {
            config = config.with_ip_api_url(url);
        }
        Ok(config)
    }
}
