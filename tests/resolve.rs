//! End-to-end resolution scenarios against a mocked device search endpoint

use std::collections::HashMap;

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use axtool::client::ApiClient;
use axtool::config::ApiConfig;
use axtool::resolve::{AssetResolver, BatchRunner, NoopPacer, read_devices, write_results};

const DEVICES_PATH: &str = "/api/v2/assets/devices";

fn config(server: &MockServer) -> ApiConfig {
    let mut config = ApiConfig::new(server.uri(), "test-key", "test-secret");
    // Keep the timeout scenario fast
    config.timeout = 1;
    config
}

fn runner(config: &ApiConfig) -> BatchRunner<AssetResolver, NoopPacer> {
    let client = ApiClient::new(config).unwrap();
    BatchRunner::new(
        AssetResolver::new(client, config.page_limit),
        NoopPacer,
        config.base_url(),
    )
}

fn device(ip: &str, dns: &str, kind: &str) -> axtool::resolve::DeviceRecord {
    axtool::resolve::DeviceRecord::from_fields(HashMap::from([
        ("IP".to_string(), ip.to_string()),
        ("DNS".to_string(), dns.to_string()),
        ("TYPE".to_string(), kind.to_string()),
    ]))
}

#[tokio::test]
async fn resolved_host_gets_device_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .and(header("api-key", "test-key"))
        .and(header("api-secret", "test-secret"))
        .and(body_partial_json(json!({
            "include_metadata": true,
            "use_cache_entry": true,
            "include_details": true,
            "page": { "limit": 1000 }
        })))
        .and(body_string_contains("host1\\\\.example\\\\.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "internal_axon_id": "abc123", "hostname": "host1.example.com" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "host1.example.com", "server")])
        .await;

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.records()[0].field("URL"),
        Some(format!("{}/assets/devices/abc123", server.uri()).as_str())
    );
}

#[tokio::test]
async fn empty_hostname_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "", "server")])
        .await;

    assert_eq!(table.records()[0].field("URL"), Some("Empty Hostname"));
}

#[tokio::test]
async fn zero_matches_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "assets": [] })))
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "ghost.example.com", "server")])
        .await;

    assert_eq!(table.records()[0].field("URL"), Some("Not Found"));
}

#[tokio::test]
async fn multiple_matches_take_the_first_in_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [
                { "internal_axon_id": "first" },
                { "internal_axon_id": "second" }
            ]
        })))
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "dup.example.com", "server")])
        .await;

    assert_eq!(
        table.records()[0].field("URL"),
        Some(format!("{}/assets/devices/first", server.uri()).as_str())
    );
}

#[tokio::test]
async fn timeout_labels_the_row_and_the_batch_continues() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .and(body_string_contains("slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_secs(3))
                .set_body_json(json!({ "assets": [] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .and(body_string_contains("fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "internal_axon_id": "abc123" }]
        })))
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![
            device("10.0.0.1", "slow.example.com", "server"),
            device("10.0.0.2", "fast.example.com", "server"),
        ])
        .await;

    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].field("URL"), Some("Timeout Error"));
    assert_eq!(
        table.records()[1].field("URL"),
        Some(format!("{}/assets/devices/abc123", server.uri()).as_str())
    );
}

#[tokio::test]
async fn http_failure_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "host1.example.com", "server")])
        .await;

    assert_eq!(table.records()[0].field("URL"), Some("API Error"));
}

#[tokio::test]
async fn missing_identifier_shape_is_a_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "hostname": "host1.example.com" }]
        })))
        .mount(&server)
        .await;

    let config = config(&server);
    let table = runner(&config)
        .run(vec![device("10.0.0.1", "host1.example.com", "server")])
        .await;

    assert_eq!(table.records()[0].field("URL"), Some("Response Error"));
}

#[tokio::test]
async fn resolving_twice_yields_the_same_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "internal_axon_id": "abc123" }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let config = config(&server);
    let first = runner(&config)
        .run(vec![device("10.0.0.1", "host1.example.com", "server")])
        .await;
    let second = runner(&config)
        .run(vec![device("10.0.0.1", "host1.example.com", "server")])
        .await;

    assert_eq!(
        first.records()[0].field("URL"),
        second.records()[0].field("URL")
    );
}

#[tokio::test]
async fn csv_round_trip_covers_every_input_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEVICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [{ "internal_axon_id": "abc123" }]
        })))
        .mount(&server)
        .await;

    let input = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        input.path(),
        "IP,DNS,TYPE\n10.0.0.1,host1.example.com,server\n10.0.0.2,,workstation\n",
    )
    .unwrap();

    let devices = read_devices(input.path()).unwrap();
    assert_eq!(devices.len(), 2);

    let config = config(&server);
    let table = runner(&config).run(devices).await;
    assert_eq!(table.len(), 2);

    let output = tempfile::NamedTempFile::new().unwrap();
    write_results(output.path(), &table).unwrap();

    let written = std::fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "IP,DNS,TYPE,URL");
    assert!(lines[1].ends_with("/assets/devices/abc123"));
    assert!(lines[2].ends_with("Empty Hostname"));
}
