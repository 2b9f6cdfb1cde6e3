use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CardslimError;
use crate::types::CardId;
use crate::CardslimResult;

/// Key under which the full document stores its card records.
const CARDS_KEY: &str = "cards";

/// The full card catalog document, reduced to its `cards` mapping.
///
/// Records are kept as raw JSON objects; only `name` and `pretty_name` are
/// ever read from them.
#[derive(Debug, Default)]
pub struct CardCatalog {
    cards: BTreeMap<CardId, Map<String, Value>>,
}

impl CardCatalog {
    /// Open and parse a full catalog document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardslimResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CardslimError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a full catalog document from any reader.
    pub fn from_reader(reader: impl Read) -> CardslimResult<Self> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Build the catalog from an already-parsed document.
    ///
    /// The document must be an object with a `cards` object inside it, and
    /// every record under `cards` must itself be an object. Fields within a
    /// record stay unconstrained.
    pub fn from_document(document: Value) -> CardslimResult<Self> {
        let mut top = match document {
            Value::Object(top) => top,
            _ => {
                return Err(CardslimError::Malformed(
                    "top-level value is not an object".into(),
                ))
            }
        };

        let cards = match top.remove(CARDS_KEY) {
            Some(Value::Object(cards)) => cards,
            Some(_) | None => return Err(CardslimError::MissingKey { key: CARDS_KEY }),
        };

        let mut records = BTreeMap::new();
        for (id, record) in cards {
            match record {
                Value::Object(record) => {
                    records.insert(id, record);
                }
                _ => {
                    return Err(CardslimError::Malformed(format!(
                        "record '{id}' is not an object"
                    )))
                }
            }
        }

        Ok(Self { cards: records })
    }

    /// Number of card records in the catalog.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over (identifier, raw record) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &Map<String, Value>)> {
        self.cards.iter()
    }
}
