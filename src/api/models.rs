use std::fmt;

use serde::{Deserialize, Serialize};

/// Record type managed by this tool. Only IPv4 is supported.
pub const RECORD_TYPE_A: &str = "A";

/// Cloudflare's sentinel TTL meaning "automatic".
pub const TTL_AUTOMATIC: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Assigned by Cloudflare. Empty for records that have not been created yet.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

fn default_ttl() -> u32 {
    TTL_AUTOMATIC
}

impl DnsRecord {
    /// Full representation sent on create and update. TTL is automatic and
    /// proxying is off regardless of what the existing record had.
    pub fn a_record(name: &str, content: &str) -> Self {
        Self {
            id: String::new(),
            r#type: RECORD_TYPE_A.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: TTL_AUTOMATIC,
            proxied: false,
        }
    }
}

/// One entry of the envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    Detailed {
        #[serde(default)]
        code: i64,
        message: String,
    },
    Plain(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Detailed { code, message } => write!(f, "[{}] {}", code, message),
            ApiError::Plain(message) => f.write_str(message),
        }
    }
}

/// Envelope wrapping every Cloudflare response. `T` is chosen by the caller
/// according to the endpoint: a list for lookups, a single record for writes.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

pub type ListResponse = ApiResponse<Vec<DnsRecord>>;
pub type WriteResponse = ApiResponse<DnsRecord>;
