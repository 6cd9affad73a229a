/// Authority flow: which names are answered and with which response code.

#[path = "../common/mod.rs"]
mod common;

use common::{TestClient, TestServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType;

#[tokio::test]
async fn test_unserved_zone_is_not_zone() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    for name in ["127.0.0.1.wrong.io", "wrong.io", "gyip.io.evil.com"] {
        let response = client.query(name, RecordType::A).await.unwrap();
        assert_eq!(response.response_code(), ResponseCode::NotZone, "query: {}", name);
        assert!(response.authoritative());
        assert!(response.addresses().is_empty());
    }

    server.shutdown();
}

#[tokio::test]
async fn test_zone_match_requires_label_boundary() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("10.0.0.1.notgyip.io", RecordType::A).await.unwrap();
    assert_eq!(response.response_code(), ResponseCode::NotZone);

    server.shutdown();
}

#[tokio::test]
async fn test_zone_match_is_case_insensitive() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("10.0.0.1.GYIP.IO", RecordType::A).await.unwrap();
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.addresses().len(), 1);

    server.shutdown();
}

#[tokio::test]
async fn test_other_types_in_zone_are_name_error() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    for record_type in [RecordType::TXT, RecordType::MX, RecordType::CAA] {
        let response = client.query("10.0.0.1.gyip.io", record_type).await.unwrap();
        assert_eq!(
            response.response_code(),
            ResponseCode::NXDomain,
            "type: {:?}",
            record_type
        );
        assert!(response.addresses().is_empty());
    }

    server.shutdown();
}

#[tokio::test]
async fn test_other_types_outside_zone_are_not_zone() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("10.0.0.1.wrong.io", RecordType::CAA).await.unwrap();
    assert_eq!(response.response_code(), ResponseCode::NotZone);

    server.shutdown();
}

#[tokio::test]
async fn test_every_served_zone_answers() {
    let server = TestServer::start(&["gyip.io", "dog.com"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    for name in ["10.0.0.1.gyip.io", "10.0.0.1.dog.com"] {
        let response = client.query(name, RecordType::A).await.unwrap();
        assert_eq!(response.response_code(), ResponseCode::NoError, "query: {}", name);
    }

    server.shutdown();
}
