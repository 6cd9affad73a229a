use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Hosts or IP literals to bind. Empty means every interface.
    #[serde(default)]
    pub bind_hosts: Vec<String>,

    #[serde(default = "default_true")]
    pub tcp_enabled: bool,

    #[serde(default = "default_true")]
    pub udp_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_hosts: vec![],
            tcp_enabled: true,
            udp_enabled: true,
        }
    }
}

fn default_dns_port() -> u16 {
    8053
}

fn default_true() -> bool {
    true
}
