use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CardslimError;
use crate::types::{CardId, SlimCard, SlimCatalog};
use crate::CardslimResult;

/// In-memory lookup over a slimmed catalog document.
///
/// Lookup keys are anything `Display`able, since callers upstream hold
/// numeric group ids.
#[derive(Debug, Default)]
pub struct CardsDatabase {
    pub db: BTreeMap<CardId, SlimCard>,
}

impl CardsDatabase {
    /// Load a slimmed catalog document from disk.
    pub fn new(path: impl AsRef<Path>) -> CardslimResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CardslimError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a slimmed catalog document from any reader.
    pub fn from_reader(reader: impl Read) -> CardslimResult<Self> {
        let db: BTreeMap<CardId, SlimCard> = serde_json::from_reader(reader)?;
        Ok(Self { db })
    }

    pub fn get<T>(&self, id: &T) -> Option<&SlimCard>
    where
        T: Display + ?Sized,
    {
        self.db.get(&id.to_string())
    }

    /// Pretty name for a card; errors when the card is unknown or carries
    /// no pretty name.
    pub fn pretty_name<T>(&self, id: &T) -> CardslimResult<String>
    where
        T: Display + ?Sized,
    {
        let key = id.to_string();
        let card = self
            .db
            .get(&key)
            .ok_or_else(|| CardslimError::UnknownCard(key.clone()))?;
        card.pretty_name
            .clone()
            .ok_or(CardslimError::NoPrettyName(key))
    }

    /// Pretty name with fallback to the identifier itself.
    pub fn pretty_name_or_id<T>(&self, id: &T) -> String
    where
        T: Display + ?Sized,
    {
        self.pretty_name(id).unwrap_or_else(|_| id.to_string())
    }
}

impl From<SlimCatalog> for CardsDatabase {
    fn from(db: SlimCatalog) -> Self {
        Self { db }
    }
}
