//! # Parsed Address
//!
//! Turns user input into a validated IP value.
//!
//! Accepted forms are the standard textual notations:
//! * Dotted-decimal IPv4 (e.g., `192.168.1.5`).
//! * Colon-hex IPv6, including compressed and IPv4-suffixed forms (e.g., `::1`, `::ffff:10.0.0.1`).
//!
//! Anything else (hostnames, CIDR blocks, zone ids, leading zeros) is rejected.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::error::AddressError;

/// A validated IP address together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    raw: String,
    addr: IpAddr,
}

impl FromStr for ParsedAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = s
            .parse::<IpAddr>()
            .map_err(|_| AddressError::Invalid { input: s.to_string() })?;

        Ok(Self {
            raw: s.to_string(),
            addr,
        })
    }
}

impl ParsedAddress {
    /// The input exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Network-order bytes: 4 for IPv4 input, 16 for IPv6 input.
    pub fn octets(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }

    /// The IPv4 form of the address, if it has one.
    ///
    /// IPv4-mapped IPv6 literals (`::ffff:a.b.c.d`) count as IPv4.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self.addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.as_ipv4().is_some()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
