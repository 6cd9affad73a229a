use fancy_regex::Regex;
use std::sync::{Arc, LazyLock};

static HOSTNAME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9])$",
    )
    .ok()
});

/// Checks a zone name against the hostname grammar. One trailing dot is allowed.
pub fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return false;
    }

    HOSTNAME_PATTERN
        .as_ref()
        .map(|re| re.is_match(domain).unwrap_or(false))
        .unwrap_or(false)
}

/// Splits a comma separated zone list into normalized zone names.
///
/// Entries are trimmed, lowercased and stripped of a trailing dot. Empty and
/// invalid entries are dropped, duplicates keep their first position.
pub fn split_zones(input: &str) -> Vec<String> {
    let mut zones: Vec<String> = Vec::new();

    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if !is_valid_domain(entry) {
            tracing::warn!(zone = %entry, "Ignoring invalid zone name");
            continue;
        }

        let zone = entry.trim_end_matches('.').to_ascii_lowercase();
        if !zones.contains(&zone) {
            zones.push(zone);
        }
    }

    zones
}

/// A query name split at the served zone it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMatch<'a> {
    pub zone: &'a str,
    /// Labels left of the zone, without the separating dot. May be empty.
    pub remainder: &'a str,
}

/// The zones this server answers for. Built once at startup, read-only after.
#[derive(Debug, Clone, Default)]
pub struct ServedZones {
    zones: Arc<[Arc<str>]>,
}

impl ServedZones {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<Arc<str>> = Vec::new();
        for zone in zones {
            let zone = zone.as_ref().trim().trim_end_matches('.').to_ascii_lowercase();
            if zone.is_empty() || normalized.iter().any(|z| **z == *zone) {
                continue;
            }
            normalized.push(zone.into());
        }

        Self {
            zones: normalized.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| &**z)
    }

    /// Finds the longest served zone that `name` falls under.
    ///
    /// Matching is case-insensitive and respects label boundaries, so
    /// `xgyip.io` is not under `gyip.io`.
    pub fn find<'a>(&'a self, name: &'a str) -> Option<ZoneMatch<'a>> {
        let name = name.strip_suffix('.').unwrap_or(name);
        let bytes = name.as_bytes();

        self.zones
            .iter()
            .filter_map(|zone| {
                let zone_len = zone.len();
                if bytes.len() == zone_len {
                    return bytes
                        .eq_ignore_ascii_case(zone.as_bytes())
                        .then_some((zone, ""));
                }
                if bytes.len() <= zone_len {
                    return None;
                }

                let start = bytes.len() - zone_len;
                if bytes[start - 1] != b'.' || !bytes[start..].eq_ignore_ascii_case(zone.as_bytes())
                {
                    return None;
                }
                Some((zone, &name[..start - 1]))
            })
            .max_by_key(|(zone, _)| zone.len())
            .map(|(zone, remainder)| ZoneMatch {
                zone: &**zone,
                remainder,
            })
    }
}
