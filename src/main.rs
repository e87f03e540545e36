mod api;
mod config;
mod ddns;
mod error;
mod ip;
#[cfg(test)]
mod tests;

use std::process::ExitCode;

use anyhow::{Context, Result};
use ddns::Outcome;
use log::info;

async fn run() -> Result<Outcome> {
    let outcome = ddns::run_with(|key| std::env::var(key).ok())
        .await
        .context("dynamic DNS update failed")?;
    Ok(outcome)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(Outcome::Unchanged { ip }) => {
            info!("Nothing to do, record already points at {}", ip);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Updated { from, to }) => {
            info!("DNS update successful! {} -> {}", from, to);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Created { ip }) => {
            info!("DNS update successful! Created record for {}", ip);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Printed directly so the diagnostic survives RUST_LOG=off.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
