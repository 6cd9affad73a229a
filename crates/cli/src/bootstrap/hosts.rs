use futures::future::join_all;
use std::net::{IpAddr, Ipv4Addr};
use tokio::net::lookup_host;
use tracing::warn;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Turns configured bind entries into addresses to listen on.
///
/// Entries may hold comma separated lists. Unusable entries are dropped.
/// An unspecified address anywhere in the list wins over everything else,
/// and an empty result falls back to `0.0.0.0`.
pub async fn split_hosts<S: AsRef<str>>(entries: &[S]) -> Vec<IpAddr> {
    let names: Vec<&str> = entries
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    let resolved = join_all(names.iter().map(|name| resolve_host(name))).await;

    let mut hosts: Vec<IpAddr> = Vec::new();
    for address in resolved.into_iter().flatten() {
        if address.is_unspecified() {
            return vec![address];
        }
        if !hosts.contains(&address) {
            hosts.push(address);
        }
    }

    if hosts.is_empty() {
        hosts.push(DEFAULT_BIND_HOST);
    }
    hosts
}

async fn resolve_host(name: &str) -> Vec<IpAddr> {
    if let Ok(address) = name.parse::<IpAddr>() {
        return vec![address];
    }

    // malformed literals never go to the resolver
    if looks_like_literal(name) {
        warn!(host = name, "Invalid bind address, skipping");
        return Vec::new();
    }

    match lookup_host((name, 0)).await {
        Ok(addresses) => addresses.map(|a| a.ip()).collect(),
        Err(e) => {
            warn!(host = name, error = %e, "Cannot resolve bind host, skipping");
            Vec::new()
        }
    }
}

fn looks_like_literal(name: &str) -> bool {
    name.contains(':') || name.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
