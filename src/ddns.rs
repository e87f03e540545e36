use crate::api::{models::DnsRecord, CloudflareClient, DnsApiClient};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::ip::fetch_current_ip;
use log::info;

/// What the run has to do to bring the record in line with the current IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NoOp,
    Update { record_id: String, from: String },
    Create,
}

/// What the run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged { ip: String },
    Updated { from: String, to: String },
    Created { ip: String },
}

/// Decides between no-op, update and create. No I/O.
pub fn plan(current_ip: &str, existing: Option<&DnsRecord>) -> Action {
    match existing {
        None => Action::Create,
        Some(record) if record.content == current_ip => Action::NoOp,
        Some(record) => Action::Update {
            record_id: record.id.clone(),
            from: record.content.clone(),
        },
    }
}

/// Applies an already-decided action through the provider client.
pub async fn apply<C>(api: &C, current_ip: String, action: Action) -> Result<Outcome>
where
    C: DnsApiClient + Sync,
{
    match action {
        Action::NoOp => {
            info!("DNS record is already up to date");
            Ok(Outcome::Unchanged { ip: current_ip })
        }
        Action::Update { record_id, from } => {
            info!("Updating DNS record from {} to {}", from, current_ip);
            api.update_record(&record_id, &current_ip).await?;
            Ok(Outcome::Updated {
                from,
                to: current_ip,
            })
        }
        Action::Create => {
            info!("DNS record not found, creating new record");
            api.create_record(&current_ip).await?;
            Ok(Outcome::Created { ip: current_ip })
        }
    }
}

/// Loads the config from `lookup` and runs one pass. A config error returns
/// before any HTTP client exists.
pub async fn run_with<F>(lookup: F) -> Result<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup)?;
    reconcile(&config).await
}

/// One pass: resolve the public IP, look up the record, then create or update
/// it if needed. Stops at the first error.
pub async fn reconcile(config: &Config) -> Result<Outcome> {
    let client = build_http_client(config)?;

    let current_ip = fetch_current_ip(&client, &config.ip_api_url).await?;
    info!("Current public IP: {}", current_ip);

    let api = CloudflareClient::new(client, config);
    let existing = api.find_record().await?;
    let action = plan(&current_ip, existing.as_ref());

    apply(&api, current_ip, action).await
}

// No idle pooling: each connection is dropped once its request finishes.
fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .pool_max_idle_per_host(0)
        .build()
        .map_err(Error::Client)
}
