use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier a card is keyed by in the catalog (Arena group id as a string).
pub type CardId = String;

/// The three-field slim representation of a card.
///
/// Absent `name`/`pretty_name` fields serialize as explicit nulls rather
/// than being omitted, so every entry in the emitted document has the same
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlimCard {
    pub name: Option<String>,
    pub pretty_name: Option<String>,
    pub id: CardId,
}

/// The slimmed catalog, keyed by the same identifiers as the input.
pub type SlimCatalog = BTreeMap<CardId, SlimCard>;
