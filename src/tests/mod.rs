mod cloudflare;

use crate::config::Config;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "t";
pub const ZONE: &str = "z1";
pub const NAME: &str = "home.example.com";
pub const RECORDS_PATH: &str = "/zones/z1/dns_records";

/// Config pointing both the IP service and the Cloudflare API at the mock.
pub fn test_config(server: &MockServer) -> Config {
    Config::new(TOKEN, ZONE, NAME)
        .with_api_base_url(server.uri())
        .with_ip_api_url(format!("{}/ip", server.uri()))
}

pub fn record_json(id: &str, content: &str) -> Value {
    json!({
        "id": id,
        "type": "A",
        "name": NAME,
        "content": content,
        "ttl": 1,
        "proxied": false,
    })
}

pub fn success(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    })
}

pub fn failure(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{"code": code, "message": message}],
        "messages": [],
        "result": null,
    })
}

/// Request body expected on both create and update.
pub fn write_body(content: &str) -> Value {
    json!({
        "type": "A",
        "name": NAME,
        "content": content,
        "ttl": 1,
        "proxied": false,
    })
}
