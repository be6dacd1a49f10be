use std::io::{self, Write};

use netkit_common::config::Config;
use netkit_core::geolocation::IpWhoIsClient;
use netkit_core::inspector::InspectService;

use crate::terminal::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    InvalidAddress,
}

pub async fn info(ip: &str, cfg: &Config) -> anyhow::Result<Outcome> {
    let geo_locator = IpWhoIsClient::new(cfg)?;
    let service = InspectService::new(Box::new(geo_locator));

    let mut stdout = io::stdout();
    let outcome = run(&service, ip, &mut stdout).await?;
    stdout.flush()?;
    Ok(outcome)
}

/// Inspects `ip` and writes either the report or the invalid-address line to `out`.
pub async fn run<W: Write>(
    service: &InspectService,
    ip: &str,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    match service.inspect(ip).await {
        Ok(report) => {
            report::write_report(out, &report)?;
            Ok(Outcome::Reported)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(Outcome::InvalidAddress)
        }
    }
}
