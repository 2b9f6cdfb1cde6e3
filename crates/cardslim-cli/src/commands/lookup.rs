use clap::Args;
use serde_json::Value;

use cardslim_core::database::CardsDatabase;

/// Fixed location of the slimmed catalog document, relative to the working
/// directory.
const SLIM_CATALOG_PATH: &str = "cards.json";

/// Arguments for pretty-name lookup
#[derive(Args)]
pub struct LookupArgs {
    /// Card identifier to resolve
    pub id: String,
}

pub fn run_lookup(args: LookupArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let db = CardsDatabase::new(SLIM_CATALOG_PATH)?;
    Ok(Value::String(db.pretty_name_or_id(&args.id)))
}
