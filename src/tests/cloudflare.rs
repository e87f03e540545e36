use super::*;
use crate::api::{CloudflareClient, DnsApiClient};
use crate::error::{Error, Step};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_find_record_sends_filters_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .and(query_param("type", "A"))
        .and(query_param("name", NAME))
        .and(header("Authorization", "Bearer t"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(json!([
                record_json("abc123", "203.0.113.1"),
                record_json("def456", "203.0.113.2"),
            ]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    let record = api.find_record().await.unwrap().expect("record expected");
    assert_eq!(record.id, "abc123");
    assert_eq!(record.content, "203.0.113.1");
}

#[tokio::test]
async fn test_find_record_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    assert_eq!(api.find_record().await.unwrap(), None);
}

#[tokio::test]
async fn test_find_record_success_without_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "errors": []})))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    match api.find_record().await.unwrap_err() {
        Error::Decode { step, source } => {
            assert_eq!(step, Step::LookupRecord);
            assert_eq!(source.to_string(), "missing field `result`");
        }
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_record_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(failure(10000, "Authentication error")))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    match api.find_record().await.unwrap_err() {
        Error::Provider { step, errors } => {
            assert_eq!(step, Step::LookupRecord);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].to_string(), "[10000] Authentication error");
        }
        other => panic!("expected a provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_record_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    let err = api.find_record().await.unwrap_err();
    assert!(
        matches!(err, Error::Decode { step: Step::LookupRecord, .. }),
        "unexpected error: {:?}",
        err
    );
}

#[tokio::test]
async fn test_update_record_puts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/abc123", RECORDS_PATH)))
        .and(header("Authorization", "Bearer t"))
        .and(body_json(write_body("203.0.113.7")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(record_json("abc123", "203.0.113.7"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    api.update_record("abc123", "203.0.113.7").await.unwrap();
}

#[tokio::test]
async fn test_create_record_posts_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RECORDS_PATH))
        .and(header("Authorization", "Bearer t"))
        .and(body_json(write_body("203.0.113.7")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(record_json("new789", "203.0.113.7"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    api.create_record("203.0.113.7").await.unwrap();
}

#[tokio::test]
async fn test_create_record_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RECORDS_PATH))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(failure(81057, "An identical record already exists.")),
        )
        .mount(&server)
        .await;

    let config = test_config(&server);
    let api = CloudflareClient::new(reqwest::Client::new(), &config);

    let err = api.create_record("203.0.113.7").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to create record: cloudflare API error: [81057] An identical record already exists."
    );
}
