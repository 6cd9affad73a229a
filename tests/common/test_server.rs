use gyip_application::use_cases::ResolveQueryUseCase;
use gyip_domain::ServedZones;
use gyip_infrastructure::dns::DnsServerHandler;
use gyip_infrastructure::random::ThreadRandomSource;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

/// A gyip handler served on ephemeral loopback ports.
pub struct TestServer {
    udp_addr: SocketAddr,
    tcp_addr: SocketAddr,
    task: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start(zones: &[&str]) -> Result<Self, std::io::Error> {
        let udp_socket = UdpSocket::bind("127.0.0.1:0").await?;
        let udp_addr = udp_socket.local_addr()?;
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await?;
        let tcp_addr = tcp_listener.local_addr()?;

        let use_case = Arc::new(ResolveQueryUseCase::new(
            ServedZones::new(zones),
            Arc::new(ThreadRandomSource),
        ));

        let mut server = ServerFuture::new(DnsServerHandler::new(use_case));
        server.register_socket(udp_socket);
        server.register_listener(tcp_listener, Duration::from_secs(5));

        let task = tokio::spawn(async move {
            let _ = server.block_until_done().await;
        });

        Ok(Self {
            udp_addr,
            tcp_addr,
            task: Some(task),
        })
    }

    pub fn udp_addr(&self) -> SocketAddr {
        self.udp_addr
    }

    pub fn tcp_addr(&self) -> SocketAddr {
        self.tcp_addr
    }

    pub fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
