//! The persisted character document.
//!
//! This is the exact JSON shape the vault accepts: attribute records carry
//! their derived modifier, skill records carry the governing attribute name
//! under the vault's historical `modifier` field. Skill totals are never
//! persisted; they are recomputed from attributes on every read.

use crate::attributes::Attribute;
use crate::skills::Skill;
use serde::{Deserialize, Serialize};

/// A skill as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,

    #[serde(rename = "baseValue")]
    pub base_value: i32,

    /// Governing attribute name. The vault's schema predates the rename and
    /// still calls this field `modifier`; the wire name is load-bearing.
    #[serde(rename = "modifier")]
    pub governing_attribute: String,
}

impl From<&Skill> for SkillRecord {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name().to_string(),
            base_value: skill.base_value(),
            governing_attribute: skill.governing().to_string(),
        }
    }
}

/// The complete persisted document for one character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterDocument {
    pub attributes: Vec<Attribute>,
    pub skills: Vec<SkillRecord>,
}

impl CharacterDocument {
    /// Build a document from store snapshots.
    pub fn new(attributes: Vec<Attribute>, skills: Vec<Skill>) -> Self {
        Self {
            attributes,
            skills: skills.iter().map(SkillRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_field_names() {
        let document = CharacterDocument::new(
            vec![Attribute::new("Dexterity", 12)],
            vec![Skill::new("Stealth", "Dexterity").with_base_value(3)],
        );

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["attributes"][0]["name"], "Dexterity");
        assert_eq!(json["attributes"][0]["value"], 12);
        assert_eq!(json["attributes"][0]["modifier"], 1);
        assert_eq!(json["skills"][0]["name"], "Stealth");
        assert_eq!(json["skills"][0]["baseValue"], 3);
        // The skill `modifier` field carries the governing attribute name.
        assert_eq!(json["skills"][0]["modifier"], "Dexterity");
    }

    #[test]
    fn test_totals_are_not_persisted() {
        let document = CharacterDocument::new(
            vec![Attribute::new("Dexterity", 12)],
            vec![Skill::new("Stealth", "Dexterity").with_base_value(3)],
        );
        let json = serde_json::to_value(&document).unwrap();
        assert!(json["skills"][0].get("total").is_none());
    }

    #[test]
    fn test_document_round_trip() {
        let document = CharacterDocument::new(
            vec![Attribute::new("Strength", 14), Attribute::new("Wisdom", 8)],
            vec![Skill::new("Athletics", "Strength").with_base_value(2)],
        );
        let json = serde_json::to_string(&document).unwrap();
        let parsed: CharacterDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
