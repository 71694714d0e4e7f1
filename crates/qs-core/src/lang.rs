//! User-facing chat messages.
//!
//! Built-in English strings, optionally overridden by a JSON table of
//! `"quickstrip:<key>": "text"` entries. Unknown or missing keys always fall
//! back to the built-in string, so a partial translation file is fine.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use strum::EnumIter;
use thiserror::Error;

/// Identifier of a chat line the mod can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MessageId {
    /// Armor was taken off.
    Stripped,
    /// Armor was put on.
    Equipped,
    /// No lantern, torch or night-vision device anywhere.
    NoLight,
    /// No spare piece found for an empty slot.
    MissingPiece,
    /// Damage triggered the auto-equip.
    Panic,
}

impl MessageId {
    /// Catalog key, as used in translation files.
    pub const fn key(&self) -> &'static str {
        match self {
            MessageId::Stripped => "quickstrip:stripped",
            MessageId::Equipped => "quickstrip:equipped",
            MessageId::NoLight => "quickstrip:nolight",
            MessageId::MissingPiece => "quickstrip:missingpiece",
            MessageId::Panic => "quickstrip:panic",
        }
    }

    /// Built-in English text.
    const fn builtin(&self) -> &'static str {
        match self {
            MessageId::Stripped => "You strip off your armor.",
            MessageId::Equipped => "You put your armor on.",
            MessageId::NoLight => "You have no light source to hand.",
            MessageId::MissingPiece => "You have no spare piece for that slot.",
            MessageId::Panic => "You panic and grab for your armor!",
        }
    }
}

/// Errors reading a translation file.
#[derive(Debug, Error)]
pub enum LangError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed translation table: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Message catalog with optional overrides.
#[derive(Debug, Clone, Default)]
pub struct Lang {
    overrides: HashMap<String, String>,
}

impl Lang {
    /// Catalog with only the built-in strings.
    pub fn new() -> Self {
        Lang::default()
    }

    /// Load an override table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LangError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let overrides: HashMap<String, String> = serde_json::from_reader(reader)?;
        Ok(Lang { overrides })
    }

    /// The text for a message id.
    pub fn get(&self, id: MessageId) -> &str {
        self.overrides
            .get(id.key())
            .map(String::as_str)
            .unwrap_or_else(|| id.builtin())
    }
}
