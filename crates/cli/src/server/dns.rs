use gyip_domain::config::ServerConfig;
use gyip_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves every bind host until SIGINT or SIGTERM.
pub async fn start_dns_server(
    hosts: &[IpAddr],
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let mut server = ServerFuture::new(handler);

    for host in hosts {
        let socket_addr = SocketAddr::new(*host, config.dns_port);

        if config.udp_enabled {
            server.register_socket(create_udp_socket(socket_addr)?);
            info!(bind_address = %socket_addr, protocol = "UDP", "DNS server listening");
        }

        if config.tcp_enabled {
            server.register_listener(create_tcp_listener(socket_addr)?, TCP_TIMEOUT);
            info!(bind_address = %socket_addr, protocol = "TCP", "DNS server listening");
        }
    }

    info!("DNS server ready to accept queries");

    let signal = tokio::select! {
        result = server.block_until_done() => {
            result?;
            return Ok(());
        }
        signal = shutdown_signal() => signal?,
    };

    info!(signal, "Signal received, stopping");
    server.shutdown_gracefully().await?;
    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(Domain::for_address(socket_addr), Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(socket_addr), Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}

#[cfg(unix)]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    Ok(tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    })
}

#[cfg(not(unix))]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("SIGINT")
}
