use serde_json::Value;

use cardslim_core::catalog::CardCatalog;
use cardslim_core::project::project;

/// Fixed location of the full catalog document, relative to the working
/// directory.
const FULL_CATALOG_PATH: &str = "cards-full.json";

pub fn run_slim() -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = CardCatalog::from_path(FULL_CATALOG_PATH)?;
    let slim = project(&catalog);
    Ok(serde_json::to_value(slim)?)
}
