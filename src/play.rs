//! Play records and the catalog performances are resolved against.

use crate::error::{Result, StatementError};
use crate::invoice::Performance;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Genre of a play, which selects its pricing and credit rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Every genre with a row in the rule table.
    pub const ALL: [Genre; 2] = [Genre::Tragedy, Genre::Comedy];

    /// The tag used for this genre in play records.
    pub fn tag(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl FromStr for Genre {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.tag() == s)
            .ok_or_else(|| StatementError::UnknownGenre {
                genre: s.to_string(),
            })
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A play as supplied by the caller.
///
/// The genre is kept as the raw tag. It is only interpreted when the play
/// is priced, so a catalog may hold plays no rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name printed on statement lines.
    pub name: String,

    /// Genre tag, e.g. `tragedy` or `comedy`.
    #[serde(rename = "type")]
    pub genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Interprets the genre tag.
    ///
    /// Fails with [`StatementError::UnknownGenre`] when the tag has no rules.
    pub fn genre(&self) -> Result<Genre> {
        self.genre.parse().map_err(|e| {
            warn!("Play '{}' has no pricing rules for '{}'", self.name, self.genre);
            e
        })
    }
}

/// Read-only mapping from play id to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        PlayCatalog {
            plays: HashMap::new(),
        }
    }

    /// Adds a play, returning the one previously stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, play: Play) -> Option<Play> {
        self.plays.insert(id.into(), play)
    }

    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plays.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Resolves the play a performance refers to.
    ///
    /// A missing id is reported as [`StatementError::UnresolvedPlay`].
    pub fn play_for(&self, performance: &Performance) -> Result<&Play> {
        self.plays.get(&performance.play_id).ok_or_else(|| {
            warn!("No play in catalog for id '{}'", performance.play_id);
            StatementError::UnresolvedPlay {
                play_id: performance.play_id.clone(),
            }
        })
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        PlayCatalog {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parses_known_tags() {
        assert_eq!("tragedy".parse::<Genre>().unwrap(), Genre::Tragedy);
        assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
    }

    #[test]
    fn test_genre_rejects_unknown_tag() {
        match "musical".parse::<Genre>() {
            Err(StatementError::UnknownGenre { genre }) => assert_eq!(genre, "musical"),
            other => panic!("Expected UnknownGenre, got {:?}", other),
        }
    }

    #[test]
    fn test_genre_tags_are_case_sensitive() {
        assert!("Tragedy".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_display_matches_tag() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string(), genre.tag());
        }
    }

    #[test]
    fn test_play_for_resolves_known_id() {
        let catalog: PlayCatalog = [("hamlet", Play::new("Hamlet", "tragedy"))]
            .into_iter()
            .collect();

        let play = catalog.play_for(&Performance::new("hamlet", 10)).unwrap();
        assert_eq!(play.name, "Hamlet");
        assert_eq!(play.genre().unwrap(), Genre::Tragedy);
    }

    #[test]
    fn test_play_for_reports_missing_id() {
        let catalog = PlayCatalog::new();

        match catalog.play_for(&Performance::new("macbeth", 10)) {
            Err(StatementError::UnresolvedPlay { play_id }) => assert_eq!(play_id, "macbeth"),
            other => panic!("Expected UnresolvedPlay, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut catalog = PlayCatalog::new();
        assert!(catalog.insert("hamlet", Play::new("Hamlet", "tragedy")).is_none());

        let previous = catalog.insert("hamlet", Play::new("Hamlet II", "tragedy"));
        assert_eq!(previous.unwrap().name, "Hamlet");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("hamlet").unwrap().name, "Hamlet II");
    }
}
