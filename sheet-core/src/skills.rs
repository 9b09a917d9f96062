//! Skill storage and derived totals.
//!
//! Skills own only their base value. The displayed total combines the base
//! value with the governing attribute's current modifier and is recomputed on
//! every read, so independent attribute edits are reflected immediately
//! without any cache to invalidate.

use crate::attributes::AttributeStore;
use thiserror::Error;

/// Lookup failure on a mutating skill operation.
///
/// Same strictness as attribute mutation: an unknown name or out-of-range
/// index indicates a configuration mismatch, not a user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown skill: {0}")]
pub struct UnknownSkill(pub String);

/// A named skill bound to its governing attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    base_value: i32,
    governing: String,
}

impl Skill {
    /// Create a skill at base value 0.
    pub fn new(name: impl Into<String>, governing: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_value: 0,
            governing: governing.into(),
        }
    }

    /// Set the starting base value; used by the restore path.
    pub fn with_base_value(mut self, base_value: i32) -> Self {
        self.base_value = base_value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_value(&self) -> i32 {
        self.base_value
    }

    /// Name of the attribute whose modifier feeds this skill's total.
    pub fn governing(&self) -> &str {
        &self.governing
    }

    /// Current total: base value plus the governing attribute's modifier.
    ///
    /// Pure and uncached. A governing attribute missing from the store
    /// contributes 0 through the store's lenient read path.
    pub fn total(&self, attributes: &AttributeStore) -> i32 {
        self.base_value + attributes.modifier_of(&self.governing)
    }
}

/// Ordered collection of skills.
#[derive(Debug, Clone, Default)]
pub struct SkillStore {
    skills: Vec<Skill>,
}

impl SkillStore {
    /// Create a store from (name, governing attribute) bindings, all at
    /// base value 0.
    pub fn from_bindings<I, S, G>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, G)>,
        S: Into<String>,
        G: Into<String>,
    {
        Self {
            skills: bindings
                .into_iter()
                .map(|(name, governing)| Skill::new(name, governing))
                .collect(),
        }
    }

    /// Create a store from fully specified skills; used by the restore path.
    pub fn from_skills(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// Increase a skill's base value by one. No upper bound.
    pub fn increase(&mut self, name: &str) -> Result<(), UnknownSkill> {
        self.find_mut(name)?.base_value += 1;
        Ok(())
    }

    /// Decrease a skill's base value by one; a skill at 0 stays at 0.
    ///
    /// Same floor policy as attributes: the no-op is not an error.
    pub fn decrease(&mut self, name: &str) -> Result<(), UnknownSkill> {
        let skill = self.find_mut(name)?;
        if skill.base_value > 0 {
            skill.base_value -= 1;
        }
        Ok(())
    }

    /// Positional variant of [`SkillStore::increase`].
    pub fn increase_at(&mut self, index: usize) -> Result<(), UnknownSkill> {
        self.find_at_mut(index)?.base_value += 1;
        Ok(())
    }

    /// Positional variant of [`SkillStore::decrease`].
    pub fn decrease_at(&mut self, index: usize) -> Result<(), UnknownSkill> {
        let skill = self.find_at_mut(index)?;
        if skill.base_value > 0 {
            skill.base_value -= 1;
        }
        Ok(())
    }

    /// Current total of the named skill.
    pub fn total_of(
        &self,
        name: &str,
        attributes: &AttributeStore,
    ) -> Result<i32, UnknownSkill> {
        self.get(name)
            .map(|skill| skill.total(attributes))
            .ok_or_else(|| UnknownSkill(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Immutable ordered copy of all skills for serialization.
    pub fn snapshot(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Skill, UnknownSkill> {
        self.skills
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| UnknownSkill(name.to_string()))
    }

    fn find_at_mut(&mut self, index: usize) -> Result<&mut Skill, UnknownSkill> {
        self.skills
            .get_mut(index)
            .ok_or_else(|| UnknownSkill(format!("index {index}")))
    }
}
