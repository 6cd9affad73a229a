use crate::ports::RandomSource;
use std::fmt;
use std::net::IpAddr;

/// TTL for stable answers.
pub const DEFAULT_TTL: u32 = 43_200;

/// TTL for answers that may differ on the next query.
pub const DEFAULT_SHORT_TTL: u32 = 10;

/// Addresses to answer with and how long resolvers may cache them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddressSet {
    pub addresses: Vec<IpAddr>,
    pub ttl: u32,
}

impl ResolvedAddressSet {
    fn stable(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses,
            ttl: DEFAULT_TTL,
        }
    }

    fn short(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses,
            ttl: DEFAULT_SHORT_TTL,
        }
    }
}

/// Directive carried in the trailing label of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    Noop,
    /// Answer with one address picked at random.
    RoundRobin,
    /// Answer with nothing `percent` percent of the time. Always in `0..=99`.
    Fail { percent: u8 },
    /// Answer with the requester's own address.
    Echo,
}

impl Command {
    /// Parses a single label, case-insensitively.
    ///
    /// Accepts `RR`, `F` followed by one or two digits, `ECHO` and `REFLECT`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.to_ascii_uppercase();
        match label.as_str() {
            "RR" => return Some(Command::RoundRobin),
            "ECHO" | "REFLECT" => return Some(Command::Echo),
            _ => {}
        }

        let digits = label.strip_prefix('F')?;
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let percent: u8 = digits.parse().ok()?;
        (percent <= 99).then_some(Command::Fail { percent })
    }

    pub fn execute(
        &self,
        addresses: Vec<IpAddr>,
        random: &dyn RandomSource,
        caller: Option<IpAddr>,
    ) -> ResolvedAddressSet {
        match self {
            Command::Noop => ResolvedAddressSet::stable(addresses),

            Command::RoundRobin => {
                if addresses.len() > 1 {
                    let chosen = addresses[random.below(addresses.len())];
                    ResolvedAddressSet::short(vec![chosen])
                } else {
                    ResolvedAddressSet::stable(addresses)
                }
            }

            Command::Fail { percent } => {
                // no roll at 0: a roll of 0 would otherwise fail
                if *percent > 0 && random.below(100) <= usize::from(*percent) {
                    ResolvedAddressSet::short(Vec::new())
                } else {
                    ResolvedAddressSet::stable(addresses)
                }
            }

            Command::Echo => ResolvedAddressSet::short(caller.into_iter().collect()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Noop => write!(f, "NOOP"),
            Command::RoundRobin => write!(f, "RR"),
            Command::Fail { percent } => write!(f, "F{}", percent),
            Command::Echo => write!(f, "ECHO"),
        }
    }
}
