//! Static (locale, key) → display string lookup, plus the persisted
//! locale preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::StorageError;
use crate::storage::{KeyValueStore, LANGUAGE_KEY};

mod translations;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Sr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sr => "sr",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => translations::EN,
            Locale::Sr => translations::SR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "sr" => Ok(Locale::Sr),
            other => Err(format!("unsupported locale '{other}' (expected 'en' or 'sr')")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Looks up `key` for the active locale. Unknown keys come back unchanged.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.locale
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

/// Reads the saved locale. Missing or unrecognised values fall back to English.
pub fn load_locale(store: &dyn KeyValueStore) -> Locale {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring saved locale: {e}");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(e) => {
            warn!("Could not read locale preference: {e}");
            Locale::default()
        }
    }
}

pub fn save_locale(store: &dyn KeyValueStore, locale: Locale) -> Result<(), StorageError> {
    store.set(LANGUAGE_KEY, locale.code())
}
