use std::io::{self, Write};

use netkit_common::network::report::Report;

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let classification = &report.classification;

    writeln!(out, "IP Address: {}", report.address)?;
    writeln!(out, "  Version: {}", classification.version)?;
    if let Some(class) = classification.class {
        writeln!(out, "  Class: {class}")?;
    }
    writeln!(out, "  Scope: {}", classification.scope)?;

    if let Some(geo) = report.geo() {
        writeln!(out, "  Geo Info:")?;
        writeln!(out, "    Continent: {}", geo.continent)?;
        writeln!(out, "    Country:   {}", geo.country)?;
        writeln!(out, "    Region:    {}", geo.region)?;
        writeln!(out, "    ISP:       {}", geo.isp)?;
        writeln!(out, "    Org:       {}", geo.org)?;
    }

    Ok(())
}
