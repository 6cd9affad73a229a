use clap::Parser;
use gyip_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "gyip")]
#[command(version)]
#[command(about = "gyip - DNS server answering with the addresses written in the query name")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain to provide authority/answers for. Can be a comma separated list.
    #[arg(short = 'd', long)]
    domain: Option<String>,

    /// Port to bind (tcp and udp)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Hosts or addresses to bind, comma separated
    #[arg(long)]
    host: Option<String>,

    /// Disable listening on TCP
    #[arg(long, alias = "tcpOff")]
    tcp_off: bool,

    /// Disable listening on UDP
    #[arg(long, alias = "udpOff")]
    udp_off: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        domains: cli.domain,
        dns_port: cli.port,
        bind_hosts: cli.host,
        tcp_off: cli.tcp_off,
        udp_off: cli.udp_off,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting gyip v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        tcp = config.server.tcp_enabled,
        udp = config.server.udp_enabled,
        "Configuration loaded"
    );

    let hosts = bootstrap::split_hosts(&config.server.bind_hosts).await;
    let services = di::DnsServices::new(&config);

    server::start_dns_server(&hosts, &config.server, services.handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
