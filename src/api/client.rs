use super::models::DnsRecord;
use crate::error::Result;
use async_trait::async_trait;

/// The three provider calls the reconciler needs.
#[async_trait]
pub trait DnsApiClient {
    async fn find_record(&self) -> Result<Option<DnsRecord>>;
    async fn update_record(&self, record_id: &str, content: &str) -> Result<()>;
    async fn create_record(&self, content: &str) -> Result<()>;
}
