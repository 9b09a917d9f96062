//! Sheet configuration: the reference data a session is built from.
//!
//! Configuration supplies the ordered attribute list, the skill list with
//! each skill pre-bound to its governing attribute, and the class catalogue.
//! The data is trusted except for one load-time check: every skill's
//! governing attribute must name a configured attribute, so a broken binding
//! is caught when the configuration is loaded rather than degrading every
//! read afterwards.

use crate::classes::ClassDef;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors from loading or validating a sheet configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Skill '{skill}' is governed by unknown attribute '{attribute}'")]
    UnknownGoverningAttribute { skill: String, attribute: String },
}

/// A skill name bound to its governing attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBinding {
    pub name: String,
    pub governing_attribute: String,
}

impl SkillBinding {
    pub fn new(name: impl Into<String>, governing_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            governing_attribute: governing_attribute.into(),
        }
    }
}

/// Reference data for one character sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Ordered attribute names.
    pub attributes: Vec<String>,

    /// Ordered skill list, each pre-bound to a governing attribute.
    pub skills: Vec<SkillBinding>,

    /// Class catalogue in display order.
    pub classes: Vec<ClassDef>,
}

impl SheetConfig {
    /// The standard sheet: six attributes, eighteen skills, three classes.
    pub fn standard() -> Self {
        Self {
            attributes: STANDARD_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            skills: STANDARD_SKILLS.clone(),
            classes: STANDARD_CLASSES.clone(),
        }
    }

    /// Load a configuration from a JSON file and validate it.
    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(
            attributes = config.attributes.len(),
            skills = config.skills.len(),
            classes = config.classes.len(),
            "loaded sheet configuration"
        );
        Ok(config)
    }

    /// Check that every skill's governing attribute is a configured
    /// attribute. The class catalogue is trusted as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for skill in &self.skills {
            if !self.attributes.contains(&skill.governing_attribute) {
                return Err(ConfigError::UnknownGoverningAttribute {
                    skill: skill.name.clone(),
                    attribute: skill.governing_attribute.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// The six standard attributes, in sheet order.
pub const STANDARD_ATTRIBUTES: [&str; 6] = [
    "Strength",
    "Dexterity",
    "Constitution",
    "Intelligence",
    "Wisdom",
    "Charisma",
];

lazy_static::lazy_static! {
    /// The standard skill list with governing-attribute bindings.
    pub static ref STANDARD_SKILLS: Vec<SkillBinding> = vec![
        SkillBinding::new("Acrobatics", "Dexterity"),
        SkillBinding::new("Animal Handling", "Wisdom"),
        SkillBinding::new("Arcana", "Intelligence"),
        SkillBinding::new("Athletics", "Strength"),
        SkillBinding::new("Deception", "Charisma"),
        SkillBinding::new("History", "Intelligence"),
        SkillBinding::new("Insight", "Wisdom"),
        SkillBinding::new("Intimidation", "Charisma"),
        SkillBinding::new("Investigation", "Intelligence"),
        SkillBinding::new("Medicine", "Wisdom"),
        SkillBinding::new("Nature", "Intelligence"),
        SkillBinding::new("Perception", "Wisdom"),
        SkillBinding::new("Performance", "Charisma"),
        SkillBinding::new("Persuasion", "Charisma"),
        SkillBinding::new("Religion", "Intelligence"),
        SkillBinding::new("Sleight of Hand", "Dexterity"),
        SkillBinding::new("Stealth", "Dexterity"),
        SkillBinding::new("Survival", "Wisdom"),
    ];

    /// The standard class catalogue and its minimum attribute values.
    pub static ref STANDARD_CLASSES: Vec<ClassDef> = vec![
        ClassDef::new("Barbarian")
            .with_minimum("Strength", 14)
            .with_minimum("Dexterity", 9)
            .with_minimum("Constitution", 9)
            .with_minimum("Intelligence", 9)
            .with_minimum("Wisdom", 9)
            .with_minimum("Charisma", 9),
        ClassDef::new("Wizard")
            .with_minimum("Strength", 9)
            .with_minimum("Dexterity", 9)
            .with_minimum("Constitution", 9)
            .with_minimum("Intelligence", 14)
            .with_minimum("Wisdom", 9)
            .with_minimum("Charisma", 9),
        ClassDef::new("Bard")
            .with_minimum("Strength", 9)
            .with_minimum("Dexterity", 9)
            .with_minimum("Constitution", 9)
            .with_minimum("Intelligence", 9)
            .with_minimum("Wisdom", 9)
            .with_minimum("Charisma", 14),
    ];
}
