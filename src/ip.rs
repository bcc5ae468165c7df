//! IP address classification: IPv4 or IPv6, with optional port suffix.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::HostsError;

/// Address family of a classified IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrKind {
    V4,
    V6,
}

impl AddrKind {
    /// Display label ("IPv4" / "IPv6").
    pub fn label(self) -> &'static str {
        match self {
            AddrKind::V4 => "IPv4",
            AddrKind::V6 => "IPv6",
        }
    }
}

/// Strip a trailing `:<port>` from a bare (colon-free) address, e.g.
/// `192.168.1.1:8080` -> `192.168.1.1`.
fn strip_v4_port(text: &str) -> Option<&str> {
    let (prefix, port) = text.rsplit_once(':')?;
    if prefix.contains(':') || port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(prefix)
}

/// Strip a bracketed port form, e.g. `[::1]:443` -> `::1`.
fn strip_v6_port(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('[')?;
    let (inner, port) = rest.rsplit_once("]:")?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(inner)
}

/// Classify `text` as IPv4 or IPv6. Accepts `host:port` and `[host]:port`
/// forms; the port is ignored for classification. Purely syntactic -- no
/// name resolution ever happens here.
pub fn classify(text: &str) -> Result<AddrKind, HostsError> {
    let candidate = strip_v4_port(text)
        .or_else(|| strip_v6_port(text))
        .unwrap_or(text);

    if candidate.parse::<Ipv4Addr>().is_ok() {
        Ok(AddrKind::V4)
    } else if candidate.parse::<Ipv6Addr>().is_ok() {
        Ok(AddrKind::V6)
    } else {
        Err(HostsError::InvalidAddress(text.to_string()))
    }
}
