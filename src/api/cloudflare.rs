use super::{client::DnsApiClient, models::*};
use crate::config::Config;
use crate::error::{Error, Result, Step};
use async_trait::async_trait;
use log::debug;
use serde::de::{self, DeserializeOwned};

/// Cloudflare v4 client bound to one zone and record name.
pub struct CloudflareClient<'a> {
    client: reqwest::Client,
    config: &'a Config,
}

#[async_trait]
impl DnsApiClient for CloudflareClient<'_> {
    async fn find_record(&self) -> Result<Option<DnsRecord>> {
        let step = Step::LookupRecord;
        let request = self
            .client
            .get(self.records_url())
            .header("Content-Type", "application/json")
            .query(&[
                ("type", self.config.record_type),
                ("name", self.config.record_name.as_str()),
            ]);

        let parsed: ListResponse = self.send(step, request).await?;
        let records = Self::check(step, parsed)?
            .ok_or_else(|| Error::decode(step, de::Error::missing_field("result")))?;
        debug!(
            "Lookup for {} returned {} record(s)",
            self.config.record_name,
            records.len()
        );

        Ok(records.into_iter().next())
    }

    /// Overwrites the whole record. TTL and proxying are reset to automatic
    /// and off, even if the existing record had other values.
    async fn update_record(&self, record_id: &str, content: &str) -> Result<()> {
        let step = Step::UpdateRecord;
        let request = self
            .client
            .put(format!("{}/{}", self.records_url(), record_id))
            .json(&DnsRecord::a_record(&self.config.record_name, content));

        let parsed: WriteResponse = self.send(step, request).await?;
        Self::check(step, parsed)?;
        Ok(())
    }

    async fn create_record(&self, content: &str) -> Result<()> {
        let step = Step::CreateRecord;
        let request = self
            .client
            .post(self.records_url())
            .json(&DnsRecord::a_record(&self.config.record_name, content));

        let parsed: WriteResponse = self.send(step, request).await?;
        Self::check(step, parsed)?;
        Ok(())
    }
}

impl<'a> CloudflareClient<'a> {
    pub fn new(client: reqwest::Client, config: &'a Config) -> Self {
        Self { client, config }
    }

    fn records_url(&self) -> String {
        format!(
            "{}/zones/{}/dns_records",
            self.config.api_base_url, self.config.zone_id
        )
    }

    /// Sends an authenticated request and decodes the envelope as `T`. The
    /// status code is not checked: Cloudflare reports failures in the body.
    async fn send<T>(&self, step: Step, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(|e| Error::transport(step, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(step, e))?;
        debug!("{} response ({}): {}", step, status, text);

        serde_json::from_str(&text).map_err(|e| Error::decode(step, e))
    }

    fn check<T>(step: Step, response: ApiResponse<T>) -> Result<Option<T>> {
        if !response.success {
            return Err(Error::Provider {
                step,
                errors: response.errors,
            });
        }
        Ok(response.result)
    }
}
