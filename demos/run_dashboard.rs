//! Paints the executive dashboard once, runs one refresh, then exports it.
//!
//! Works against a live backend when one is reachable (set COSTABELLA_API_URL
//! to point at it) and degrades to simulated data when not.

use costabella::{ConsoleSink, CostaBellaError, Dashboard};

#[tokio::main]
async fn main() -> Result<(), CostaBellaError> {
    let mut dashboard = Dashboard::builder().sink(ConsoleSink::new()).build();

    // --- First paint ---
    dashboard.initialize().await;

    // --- One scheduled refresh ---
    println!("\n--- refresh ---");
    dashboard.refresh_tick().await;

    // --- Export ---
    let path = dashboard.export_data(None)?;
    println!("\nExport written to {}", path.display());

    Ok(())
}
