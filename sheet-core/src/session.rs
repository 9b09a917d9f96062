//! CharacterSession - the primary public API for sheet editing.
//!
//! A session composes the attribute store, skill store, and class catalogue
//! into one mutable character and exposes the single serialization boundary
//! consumed by persistence. Derived values (modifiers, skill totals, class
//! eligibility) are computed on read and therefore can never drift from the
//! values they depend on.

use crate::attributes::{Attribute, AttributeStore, UnknownAttribute};
use crate::classes::{ClassCatalog, ClassDef, Requirement, UnknownClass};
use crate::config::{ConfigError, SheetConfig};
use crate::document::CharacterDocument;
use crate::skills::{Skill, SkillStore, UnknownSkill};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;
use vault::Vault;

/// Unique identifier for a sheet session, used for log correlation only.
/// It is not part of the persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub Uuid);

impl SheetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SheetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from CharacterSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Attribute error: {0}")]
    Attribute(#[from] UnknownAttribute),

    #[error("Skill error: {0}")]
    Skill(#[from] UnknownSkill),

    #[error("Class error: {0}")]
    Class(#[from] UnknownClass),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] vault::Error),
}

/// One mutable character sheet.
///
/// The session owns its stores exclusively; there is no sharing across
/// sessions and no locking. All mutations are synchronous and strictly
/// ordered. Saving is the only suspending operation and is fire-and-forget
/// with respect to local state: a failed save is reported but never reverts
/// or blocks local edits.
pub struct CharacterSession {
    id: SheetId,
    attributes: AttributeStore,
    skills: SkillStore,
    catalog: ClassCatalog,
    selected_class: Option<String>,
}

impl CharacterSession {
    /// Create a fresh session from configuration: every attribute at the
    /// default value, every skill at base value 0, nothing selected.
    pub fn new(config: SheetConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            id: SheetId::new(),
            attributes: AttributeStore::from_names(config.attributes),
            skills: SkillStore::from_bindings(
                config
                    .skills
                    .into_iter()
                    .map(|binding| (binding.name, binding.governing_attribute)),
            ),
            catalog: ClassCatalog::new(config.classes),
            selected_class: None,
        })
    }

    /// Rebuild a session from a previously serialized document.
    ///
    /// Stored values and base values are taken as-is; every modifier is
    /// recomputed rather than trusted. The class catalogue is not part of
    /// the document and is supplied separately.
    pub fn from_document(
        document: &CharacterDocument,
        classes: Vec<ClassDef>,
    ) -> Result<Self, SessionError> {
        let config = SheetConfig {
            attributes: document
                .attributes
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            skills: document
                .skills
                .iter()
                .map(|s| {
                    crate::config::SkillBinding::new(s.name.clone(), s.governing_attribute.clone())
                })
                .collect(),
            classes,
        };
        config.validate()?;

        Ok(Self {
            id: SheetId::new(),
            attributes: AttributeStore::from_values(
                document
                    .attributes
                    .iter()
                    .map(|a| (a.name().to_string(), a.value())),
            ),
            skills: SkillStore::from_skills(
                document
                    .skills
                    .iter()
                    .map(|s| {
                        Skill::new(s.name.clone(), s.governing_attribute.clone())
                            .with_base_value(s.base_value)
                    })
                    .collect(),
            ),
            catalog: ClassCatalog::new(config.classes),
            selected_class: None,
        })
    }

    pub fn id(&self) -> SheetId {
        self.id
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn increase_attribute(&mut self, name: &str) -> Result<(), SessionError> {
        self.attributes.increase(name)?;
        Ok(())
    }

    pub fn decrease_attribute(&mut self, name: &str) -> Result<(), SessionError> {
        self.attributes.decrease(name)?;
        Ok(())
    }

    /// Modifier of the named attribute; 0 for unknown names.
    pub fn modifier_of(&self, name: &str) -> i32 {
        self.attributes.modifier_of(name)
    }

    pub fn attribute_value(&self, name: &str) -> Option<i32> {
        self.attributes.value_of(name)
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    // ========================================================================
    // Skills
    // ========================================================================

    pub fn increase_skill(&mut self, name: &str) -> Result<(), SessionError> {
        self.skills.increase(name)?;
        Ok(())
    }

    pub fn decrease_skill(&mut self, name: &str) -> Result<(), SessionError> {
        self.skills.decrease(name)?;
        Ok(())
    }

    pub fn increase_skill_at(&mut self, index: usize) -> Result<(), SessionError> {
        self.skills.increase_at(index)?;
        Ok(())
    }

    pub fn decrease_skill_at(&mut self, index: usize) -> Result<(), SessionError> {
        self.skills.decrease_at(index)?;
        Ok(())
    }

    /// Current total of the named skill, reflecting the attribute store as
    /// it is right now.
    pub fn skill_total(&self, name: &str) -> Result<i32, SessionError> {
        Ok(self.skills.total_of(name, &self.attributes)?)
    }

    pub fn skills(&self) -> &SkillStore {
        &self.skills
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.names()
    }

    pub fn requirements_of(&self, name: &str) -> Result<&[Requirement], SessionError> {
        Ok(self.catalog.requirements_of(name)?)
    }

    /// Whether the character currently qualifies for the named class.
    pub fn is_eligible(&self, name: &str) -> Result<bool, SessionError> {
        Ok(self.catalog.meets_requirements(name, &self.attributes)?)
    }

    /// Names of every class currently satisfied, in catalogue order.
    pub fn eligible_classes(&self) -> Vec<&str> {
        self.catalog.eligible_classes(&self.attributes)
    }

    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// Toggle the requirement-detail view for a class.
    ///
    /// Single selection: choosing a class shows its details and replaces any
    /// previous selection; choosing the selected class again clears it.
    /// Returns the now-selected class, or `None` after a clear.
    pub fn toggle_class_details(&mut self, name: &str) -> Result<Option<&ClassDef>, SessionError> {
        if self.catalog.get(name).is_none() {
            return Err(UnknownClass(name.to_string()).into());
        }
        if self.selected_class.as_deref() == Some(name) {
            self.selected_class = None;
            return Ok(None);
        }
        self.selected_class = Some(name.to_string());
        Ok(self.catalog.get(name))
    }

    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    /// Requirement details of the currently selected class, if any.
    pub fn selected_details(&self) -> Option<&ClassDef> {
        self.selected_class
            .as_deref()
            .and_then(|name| self.catalog.get(name))
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Produce the persisted document: store snapshots, nothing derived
    /// beyond the attribute modifiers the snapshots already carry.
    pub fn serialize(&self) -> CharacterDocument {
        CharacterDocument::new(self.attributes.snapshot(), self.skills.snapshot())
    }

    /// Serialize the current state and submit it to the vault.
    ///
    /// The document captures the state at this call; later edits do not
    /// affect an in-flight save. Failure is logged and returned, and leaves
    /// local state untouched - no retry, no rollback, and nothing here
    /// prevents a subsequent save.
    pub async fn save(&self, vault: &Vault) -> Result<(), SessionError> {
        let document = self.serialize();
        match vault.submit(&document).await {
            Ok(()) => {
                tracing::info!(sheet = %self.id, "character saved");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(sheet = %self.id, %error, "character save failed");
                Err(SessionError::Persistence(error))
            }
        }
    }

    /// Ordered attribute snapshot, for presentation.
    pub fn attribute_snapshot(&self) -> Vec<Attribute> {
        self.attributes.snapshot()
    }

    /// Ordered skill snapshot, for presentation.
    pub fn skill_snapshot(&self) -> Vec<Skill> {
        self.skills.snapshot()
    }
}
