//! Level content: the built-in level set and custom pack loading.
//!
//! Levels are read-only configuration. The engine never mutates or
//! validates them; structural validation happens once here, at the
//! loading boundary, before a session is ever constructed.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ============================================================================
// TYPES
// ============================================================================

/// One selectable option within a level.
///
/// `safe` is the hidden answer key — never shown to the player before
/// the level is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its level.
    pub id: String,
    /// Player-facing text.
    pub label: String,
    /// Ground truth: true = a safe/correct pick.
    pub safe: bool,
}

/// One themed round: an instruction plus an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub instructions: String,
    pub items: Vec<Item>,
}

impl Level {
    /// Maximum attainable round score: +2 for every safe item.
    pub fn max_score(&self) -> u32 {
        self.items.iter().filter(|it| it.safe).count() as u32 * 2
    }
}

// ============================================================================
// BUILT-IN CONTENT
// ============================================================================

/// Discussion prompts shown on the teacher dashboard panel.
pub const DISCUSSION_PROMPTS: [&str; 4] = [
    "Ask: What made this website look safe or unsafe?",
    "Have students share examples of kind online messages.",
    "Encourage reflection: How can we avoid phishing messages?",
    "Reward top scorers with Digital Hero Certificates!",
];

/// The four shipped levels.
///
/// This is the reference fixture: the answer keys here drive every
/// scenario test, so the data must stay exactly as authored.
pub fn builtin_levels() -> Vec<Level> {
    fn item(id: &str, label: &str, safe: bool) -> Item {
        Item {
            id: id.to_string(),
            label: label.to_string(),
            safe,
        }
    }

    vec![
        Level {
            id: 1,
            title: "Spot the Safe Site".to_string(),
            instructions: "Click the sites that look safe. Look for https and a lock icon. \
                           Avoid suspicious or unknown sites."
                .to_string(),
            items: vec![
                item("a", "https://learn.khanacademy.org", true),
                item("b", "http://free-gifts.example.com", false),
                item("c", "https://schoolportal.edu.ng", true),
                item("d", "www.click-here-win-prize.com", false),
                item("e", "https://news.africa.today", true),
            ],
        },
        Level {
            id: 2,
            title: "Password Builder".to_string(),
            instructions: "Select the elements that make a password strong. \
                           Choose letters, numbers, and symbols."
                .to_string(),
            items: vec![
                item("a", "Your name", false),
                item("b", "@", true),
                item("c", "1234", true),
                item("d", "#", true),
                item("e", "birthday", false),
            ],
        },
        Level {
            id: 3,
            title: "Kind or Unkind?".to_string(),
            instructions: "Decide if each comment is kind or unkind. Choose the positive ones!"
                .to_string(),
            items: vec![
                item("a", "That was a great post!", true),
                item("b", "You look so weird!", false),
                item("c", "I like your idea.", true),
                item("d", "Nobody cares what you think.", false),
            ],
        },
        Level {
            id: 4,
            title: "Catch the Phish".to_string(),
            instructions: "Identify the phishing attempts. Click on the messages that look \
                           suspicious."
                .to_string(),
            items: vec![
                item("a", "You won a free phone! Click here!", false),
                item("b", "Your school notice is available on the portal.", true),
                item("c", "Update your password by entering it here.", false),
                item("d", "Your teacher uploaded new assignments.", true),
            ],
        },
    ]
}

// ============================================================================
// CUSTOM PACKS
// ============================================================================

/// Load a level pack from a JSON file.
///
/// The file is a JSON array of levels. Deserialization errors surface
/// as `io::Error` so callers have a single error channel for "could
/// not use this file". Validation is separate — see [`validate_levels`].
pub fn load_pack(path: &Path) -> io::Result<Vec<Level>> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(io::Error::other)
}

/// Structural validation for a level pack.
///
/// Returns the first problem found, phrased for the CLI user.
pub fn validate_levels(levels: &[Level]) -> Result<(), String> {
    if levels.is_empty() {
        return Err("pack contains no levels".to_string());
    }

    for level in levels {
        if level.title.trim().is_empty() {
            return Err(format!("level {} has an empty title", level.id));
        }
        if level.items.is_empty() {
            return Err(format!("level {} ({}) has no items", level.id, level.title));
        }

        let mut seen = BTreeSet::new();
        for it in &level.items {
            if it.id.trim().is_empty() {
                return Err(format!("level {}: item with empty id", level.id));
            }
            if it.label.trim().is_empty() {
                return Err(format!("level {}: item '{}' has an empty label", level.id, it.id));
            }
            if !seen.insert(it.id.as_str()) {
                return Err(format!("level {}: duplicate item id '{}'", level.id, it.id));
            }
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_set_has_four_levels() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0].title, "Spot the Safe Site");
        assert_eq!(levels[3].title, "Catch the Phish");
    }

    #[test]
    fn builtin_set_passes_validation() {
        assert_eq!(validate_levels(&builtin_levels()), Ok(()));
    }

    #[test]
    fn level_one_answer_key_matches_fixture() {
        let levels = builtin_levels();
        let safe_ids: Vec<&str> = levels[0]
            .items
            .iter()
            .filter(|it| it.safe)
            .map(|it| it.id.as_str())
            .collect();
        assert_eq!(safe_ids, vec!["a", "c", "e"]);
        assert_eq!(levels[0].items[0].label, "https://learn.khanacademy.org");
        assert_eq!(levels[0].items[1].label, "http://free-gifts.example.com");
    }

    #[test]
    fn max_score_counts_safe_items() {
        let levels = builtin_levels();
        assert_eq!(levels[0].max_score(), 6); // a, c, e
        assert_eq!(levels[1].max_score(), 6); // b, c, d
        assert_eq!(levels[2].max_score(), 4); // a, c
    }

    #[test]
    fn load_pack_round_trips_builtin_levels() {
        let levels = builtin_levels();
        let json = serde_json::to_string_pretty(&levels).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_pack(file.path()).expect("pack should load");
        assert_eq!(loaded, levels);
    }

    #[test]
    fn load_pack_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_pack(file.path()).is_err());
    }

    #[test]
    fn load_pack_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_pack(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn validation_rejects_empty_pack() {
        assert!(validate_levels(&[]).is_err());
    }

    #[test]
    fn validation_rejects_duplicate_item_ids() {
        let mut levels = builtin_levels();
        levels[0].items[1].id = "a".to_string();
        let err = validate_levels(&levels).unwrap_err();
        assert!(err.contains("duplicate item id 'a'"), "got: {}", err);
    }

    #[test]
    fn validation_rejects_level_without_items() {
        let mut levels = builtin_levels();
        levels[2].items.clear();
        let err = validate_levels(&levels).unwrap_err();
        assert!(err.contains("no items"), "got: {}", err);
    }

    #[test]
    fn validation_rejects_blank_labels() {
        let mut levels = builtin_levels();
        levels[1].items[0].label = "   ".to_string();
        assert!(validate_levels(&levels).is_err());
    }
}
