use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::errors::{OverrideLoadingError, OverrideSavingError};
use crate::punctuation::strip_punctuation;

/// Words the lexicon gets wrong or doesn't know: abbreviations, local
/// proper nouns, and a few common words it would otherwise capitalize.
const BUILTIN: &[(&str, &str)] = &[
    ("a", "a"),
    ("aarp", "AARP"),
    ("aides", "aides"),
    ("allegan", "Allegan"),
    ("an", "an"),
    ("barry", "Barry"),
    ("berrien", "Berrien"),
    ("calhoun", "Calhoun"),
    ("cass", "Cass"),
    ("dekalb", "Dekalb"),
    ("eaton", "Eaton"),
    ("er", "ER"),
    ("ged", "GED"),
    ("john", "John"),
    ("led", "led"),
    ("st", "St"),
    ("who", "who"),
    ("working", "working"),
];

/// Static mapping from a lowercase word to its canonical surface form.
///
/// Stored as a JSON object on disk:
///
/// ```json
/// { "aarp": "AARP", "john": "John" }
/// ```
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct OverrideTable {
    entries: IndexMap<String, String>,
}

/// What the table says about a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override<'a> {
    /// The stored form is the word fully uppercased (`er` → `ER`).
    Acronym(&'a str),
    /// Any other stored form.
    Word(&'a str),
}

impl<'a> Override<'a> {
    pub fn surface(self) -> &'a str {
        match self {
            Override::Acronym(s) | Override::Word(s) => s,
        }
    }
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        BUILTIN.iter().copied().collect()
    }

    /// Add an entry. The key is normalized the same way tokens are at lookup time.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        self.entries.insert(normalize_key(key.as_ref()), value.into());
        self
    }

    /// Look up a raw token: punctuation is stripped and the rest lowercased.
    /// Entries with an empty stored form count as missing.
    pub fn lookup(&self, token: &str) -> Option<Override<'_>> {
        let key = normalize_key(token);
        let surface = self.entries.get(&key).filter(|surface| !surface.is_empty())?;
        if *surface == key.to_uppercase() {
            Some(Override::Acronym(surface))
        } else {
            Some(Override::Word(surface))
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Save this table into a file. The format is a flat JSON object.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), OverrideSavingError> {
        let serialized = serde_json::to_string_pretty(&self)?;
        File::create(path)?.write_all(serialized.as_bytes())?;

        Ok(())
    }

    /// Load a table previously saved with [`save_to_file`](Self::save_to_file)
    /// or written by hand.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, OverrideLoadingError> {
        let mut string = String::new();
        File::open(path)?.read_to_string(&mut string)?;
        Self::from_json(&string)
    }

    pub fn from_json(json: &str) -> Result<Self, OverrideLoadingError> {
        let raw: IndexMap<String, String> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }
}

impl<K, V> std::iter::FromIterator<(K, V)> for OverrideTable
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = OverrideTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

fn normalize_key(token: &str) -> String {
    strip_punctuation(token).to_lowercase()
}
