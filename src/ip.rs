use crate::error::{Error, Result, Step};
use log::debug;

/// Asks the echo service for our public IPv4 address. The body is trimmed but
/// otherwise passed through as-is.
pub async fn fetch_current_ip(client: &reqwest::Client, url: &str) -> Result<String> {
    let step = Step::ResolveIp;
    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| Error::transport(step, e))?;

    let text = response
        .text()
        .await
        .map_err(|e| Error::transport(step, e))?;
    debug!("IP service returned {:?}", text);

    Ok(text.trim().to_string())
}
