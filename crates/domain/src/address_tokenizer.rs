//! Extracts IP literals embedded in a dot-separated label sequence.
//!
//! The scan runs right to left over a window `[left, right)`:
//!
//! - on a match the literal is kept and the window restarts just left of it;
//! - on a miss the window grows leftward one label at a time;
//! - once the window covers the whole prefix and still misses, one trailing
//!   label is dropped from the right edge and the scan restarts from there.
//!
//! Only that single right-edge trim is attempted, so some malformed inputs lose
//! addresses: `10.27.14.34.45.337.0.1` yields only `27.14.34.45`.

use std::net::IpAddr;

pub struct AddressTokenizer;

impl AddressTokenizer {
    /// Returns every IP literal found in `remainder`, in left-to-right order.
    pub fn tokenize(remainder: &str) -> Vec<IpAddr> {
        if remainder.is_empty() {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut right = remainder.len() as isize;
        let mut left = right - 1;

        while left >= 0 {
            if let Some(ip) = parse_window(remainder, left, right) {
                found.push(ip);
                // skip the dot separating this literal from the next label
                right = left - 1;
                left = right - 1;
                continue;
            }

            if left > 0 {
                left = grow_left(remainder, left);
            } else if right > 2 {
                right = last_dot_before(remainder, right - 1);
                left = right - 1;
            } else {
                break;
            }
        }

        found.reverse();
        found
    }
}

fn parse_window(remainder: &str, left: isize, right: isize) -> Option<IpAddr> {
    if right <= left {
        return None;
    }
    // windows may split a multi-byte character; those never hold a literal
    remainder
        .get(left as usize..right as usize)
        .and_then(|window| window.parse().ok())
}

/// Moves `left` to the start of the label preceding the current window.
fn grow_left(remainder: &str, left: isize) -> isize {
    match last_dot_before(remainder, left - 1) {
        dot if dot < 0 => 0,
        dot => dot + 1,
    }
}

/// Index of the last `.` in `remainder[..end]`, or -1.
fn last_dot_before(remainder: &str, end: isize) -> isize {
    if end <= 0 {
        return -1;
    }
    let end = (end as usize).min(remainder.len());
    remainder.as_bytes()[..end]
        .iter()
        .rposition(|&b| b == b'.')
        .map_or(-1, |pos| pos as isize)
}
