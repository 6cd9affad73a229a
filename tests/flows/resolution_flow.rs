/// Resolution flow over real sockets:
/// query name → zone match → command → decoded addresses → answer section

#[path = "../common/mod.rs"]
mod common;

use common::{TestClient, TestServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType;
use std::collections::HashSet;
use std::net::IpAddr;

fn ip(value: &str) -> IpAddr {
    value.parse().unwrap()
}

// ============================================================================
// Address decoding
// ============================================================================

#[tokio::test]
async fn test_single_address_answer() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("alpha.10.0.0.1.gyip.io", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.authoritative());
    assert_eq!(response.addresses(), vec![ip("10.0.0.1")]);
    assert_eq!(response.ttls(), vec![43_200]);

    server.shutdown();
}

#[tokio::test]
async fn test_multiple_addresses_in_query_order() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client
        .query("127.0.0.1.10.0.0.24.gyip.io", RecordType::A)
        .await
        .unwrap();

    assert_eq!(response.addresses(), vec![ip("127.0.0.1"), ip("10.0.0.24")]);

    server.shutdown();
}

#[tokio::test]
async fn test_ipv6_literal_answer() {
    let server = TestServer::start(&["gyip.io", "domain.tld"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client
        .query("2134:0000:1234:4567:2468:1236:2444:2106.domain.tld", RecordType::AAAA)
        .await
        .unwrap();

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(
        response.addresses(),
        vec![ip("2134:0:1234:4567:2468:1236:2444:2106")]
    );

    server.shutdown();
}

#[tokio::test]
async fn test_ipv4_answers_aaaa_as_mapped() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("10.0.0.1.gyip.io", RecordType::AAAA).await.unwrap();

    assert_eq!(response.addresses(), vec![ip("::ffff:10.0.0.1")]);

    server.shutdown();
}

#[tokio::test]
async fn test_no_address_is_name_error() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("domain.127.0.0.gyip.io", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.authoritative());
    assert!(response.addresses().is_empty());

    server.shutdown();
}

#[tokio::test]
async fn test_tcp_query() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.tcp_addr());

    let response = client.query_tcp("10.1.2.3.gyip.io", RecordType::A).await.unwrap();

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.addresses(), vec![ip("10.1.2.3")]);

    server.shutdown();
}

// ============================================================================
// Commands
// ============================================================================

#[tokio::test]
async fn test_round_robin_single_address() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("10.0.0.1.rr.gyip.io", RecordType::A).await.unwrap();

    assert_eq!(response.addresses(), vec![ip("10.0.0.1")]);
    assert_eq!(response.ttls(), vec![43_200]);

    server.shutdown();
}

#[tokio::test]
async fn test_round_robin_picks_each_address() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());
    let mut seen = HashSet::new();

    for _ in 0..200 {
        let response = client
            .query("10.0.0.1.10.0.0.2.10.0.0.3.RR.gyip.io", RecordType::A)
            .await
            .unwrap();
        assert_eq!(response.ttls(), vec![10]);
        seen.extend(response.addresses());
    }

    let expected: HashSet<IpAddr> = [ip("10.0.0.1"), ip("10.0.0.2"), ip("10.0.0.3")].into();
    assert_eq!(seen, expected);

    server.shutdown();
}

#[tokio::test]
async fn test_fail_command_eventually_fails() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());
    let mut failures = 0;

    for _ in 0..100 {
        let response = client.query("10.0.0.1.f99.gyip.io", RecordType::A).await.unwrap();
        if response.response_code() == ResponseCode::NXDomain {
            failures += 1;
        }
    }

    assert!(failures > 0);

    server.shutdown();
}

#[tokio::test]
async fn test_echo_returns_caller_address() {
    let server = TestServer::start(&["gyip.io"]).await.expect("Failed to start server");
    let client = TestClient::new(server.udp_addr());

    let response = client.query("echo.gyip.io", RecordType::A).await.unwrap();

    assert_eq!(response.addresses(), vec![ip("127.0.0.1")]);
    assert_eq!(response.ttls(), vec![10]);

    server.shutdown();
}
