use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::address::ParsedAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    V6,
}

/// Classful IPv4 category, selected by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Class {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Private,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub version: IpVersion,
    /// Only present for IPv4.
    pub class: Option<Ipv4Class>,
    pub scope: Scope,
}

impl Ipv4Class {
    pub fn from_first_octet(octet: u8) -> Self {
        match octet {
            0..=127 => Ipv4Class::A,
            128..=191 => Ipv4Class::B,
            192..=223 => Ipv4Class::C,
            224..=239 => Ipv4Class::D,
            240..=255 => Ipv4Class::E,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        })
    }
}

impl fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Ipv4Class::A => "Class A",
            Ipv4Class::B => "Class B",
            Ipv4Class::C => "Class C",
            Ipv4Class::D => "Class D (Multicast)",
            Ipv4Class::E => "Class E (Reserved)",
        })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Private => "Private",
            Scope::Public => "Public",
        })
    }
}

/// Derives version, class and scope. Pure and infallible.
pub fn classify(address: &ParsedAddress) -> Classification {
    match address.as_ipv4() {
        Some(v4) => Classification {
            version: IpVersion::V4,
            class: Some(Ipv4Class::from_first_octet(v4.octets()[0])),
            scope: scope_of(IpAddr::V4(v4)),
        },
        None => Classification {
            version: IpVersion::V6,
            class: None,
            scope: scope_of(address.addr()),
        },
    }
}

pub fn scope_of(ip: IpAddr) -> Scope {
    let private = match ip {
        IpAddr::V4(v4) => is_private_ipv4(v4),
        IpAddr::V6(v6) => is_private_ipv6(v6),
    };

    if private { Scope::Private } else { Scope::Public }
}

// RFC1918, loopback, link-local
fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    ip.is_private() || ip.is_loopback() || ip.is_link_local()
}

// loopback, ULA (fc00::/7), link-local (fe80::/10)
fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    ip.is_loopback() || ip.is_unique_local() || ip.is_unicast_link_local()
}
