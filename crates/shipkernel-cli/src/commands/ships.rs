//! Ships command handler: the list-vessels tool surface.

use anyhow::{Context, Result};

use shipkernel_lib::VesselCatalog;

/// List the catalog, either as a table or as the full listing payload.
pub fn handle_ships(catalog: &VesselCatalog, json: bool) -> Result<()> {
    if json {
        let listing = catalog.listing();
        let output =
            serde_json::to_string_pretty(&listing).context("failed to serialize listing")?;
        println!("{output}");
        return Ok(());
    }

    print_catalog(catalog);
    Ok(())
}

/// Print the vessel catalog to stdout in a formatted table.
fn print_catalog(catalog: &VesselCatalog) {
    let vessels = catalog.vessels();

    println!("Available vessels ({}):", vessels.len());
    println!(
        "{:<10} {:<20} {:<10} {:>10} {:>10} {:>10}",
        "IMO", "Name", "Type", "DWT (t)", "MCR (kW)", "Max RPM"
    );
    for vessel in vessels {
        println!(
            "{:<10} {:<20} {:<10} {:>10.0} {:>10.0} {:>10.1}",
            vessel.imo_number,
            vessel.name,
            vessel.vessel_type,
            vessel.dwt,
            vessel.mcr,
            vessel.max_rpm
        );
    }
}
