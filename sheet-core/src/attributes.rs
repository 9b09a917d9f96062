//! Attribute storage and modifier derivation.
//!
//! Attributes are the root of the derivation chain: every skill total and
//! every class-eligibility check reads through them. The store keeps each
//! attribute's modifier consistent with its value on every mutation, so
//! readers never see the two drift apart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default starting value for every attribute on a fresh sheet.
pub const DEFAULT_ATTRIBUTE_VALUE: i32 = 10;

/// Lookup failure on a mutating attribute operation.
///
/// Mutations are strict: editing a name that was never configured is a
/// programmer or configuration error and must surface. Reads use the lenient
/// path instead; see [`AttributeStore::modifier_of`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

/// Compute the modifier for an attribute value.
///
/// Floor division handles values below 10: 8-9 = -1, 10-11 = 0, 12-13 = +1.
pub fn modifier_for(value: i32) -> i32 {
    (value - 10).div_euclid(2)
}

/// A named attribute with its derived modifier.
///
/// The modifier is never set by callers; the store recomputes it whenever the
/// value changes, and [`Attribute::new`] derives it at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    value: i32,
    modifier: i32,
}

impl Attribute {
    /// Create an attribute, deriving the modifier from the value.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            modifier: modifier_for(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }
}

/// Ordered collection of named attributes.
///
/// Insertion order is preserved for display and serialization. Names are
/// unique and immutable after creation.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    attributes: Vec<Attribute>,
}

impl AttributeStore {
    /// Create a store with every attribute at the default starting value.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: names
                .into_iter()
                .map(|name| Attribute::new(name, DEFAULT_ATTRIBUTE_VALUE))
                .collect(),
        }
    }

    /// Create a store from explicit (name, value) pairs, deriving modifiers.
    ///
    /// Used by the restore path; stored modifiers are never trusted.
    pub fn from_values<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(name, value)| Attribute::new(name, value))
                .collect(),
        }
    }

    /// Increase an attribute by one and recompute its modifier.
    ///
    /// There is no upper bound; this always succeeds for a known name.
    pub fn increase(&mut self, name: &str) -> Result<(), UnknownAttribute> {
        let attribute = self.find_mut(name)?;
        attribute.value += 1;
        attribute.modifier = modifier_for(attribute.value);
        Ok(())
    }

    /// Decrease an attribute by one and recompute its modifier.
    ///
    /// An attribute at 0 stays at 0: the call is a silent no-op, not an
    /// error. This is an explicit floor, not a clamped decrement.
    pub fn decrease(&mut self, name: &str) -> Result<(), UnknownAttribute> {
        let attribute = self.find_mut(name)?;
        if attribute.value > 0 {
            attribute.value -= 1;
            attribute.modifier = modifier_for(attribute.value);
        }
        Ok(())
    }

    /// Modifier of the named attribute, or 0 if the name is unknown.
    ///
    /// Lenient on purpose: a skill bound to a misconfigured attribute
    /// degrades to a zero modifier instead of breaking every read.
    pub fn modifier_of(&self, name: &str) -> i32 {
        self.get(name).map(Attribute::modifier).unwrap_or(0)
    }

    /// Current value of the named attribute, if it exists.
    ///
    /// Eligibility checks need the miss to be observable: a requirement on a
    /// missing attribute fails rather than comparing against a default.
    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(Attribute::value)
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Immutable ordered copy of all attributes for serialization.
    pub fn snapshot(&self) -> Vec<Attribute> {
        self.attributes.clone()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Attribute, UnknownAttribute> {
        self.attributes
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| UnknownAttribute(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AttributeStore {
        AttributeStore::from_names(["Strength", "Dexterity"])
    }

    #[test]
    fn test_modifier_for() {
        assert_eq!(modifier_for(16), 3);
        assert_eq!(modifier_for(14), 2);
        assert_eq!(modifier_for(12), 1);
        assert_eq!(modifier_for(11), 0);
        assert_eq!(modifier_for(10), 0);
        assert_eq!(modifier_for(9), -1);
        assert_eq!(modifier_for(7), -2);
        assert_eq!(modifier_for(0), -5);
    }

    #[test]
    fn test_fresh_store_starts_at_default() {
        let store = store();
        assert_eq!(store.value_of("Strength"), Some(10));
        assert_eq!(store.modifier_of("Strength"), 0);
    }

    #[test]
    fn test_increase_recomputes_modifier() {
        let mut store = store();
        store.increase("Dexterity").unwrap();
        store.increase("Dexterity").unwrap();
        assert_eq!(store.value_of("Dexterity"), Some(12));
        assert_eq!(store.modifier_of("Dexterity"), 1);
    }

    #[test]
    fn test_decrease_recomputes_modifier() {
        let mut store = store();
        store.decrease("Strength").unwrap();
        assert_eq!(store.value_of("Strength"), Some(9));
        assert_eq!(store.modifier_of("Strength"), -1);
    }

    #[test]
    fn test_decrease_at_zero_is_noop() {
        let mut store = store();
        for _ in 0..15 {
            store.decrease("Strength").unwrap();
        }
        assert_eq!(store.value_of("Strength"), Some(0));
        assert_eq!(store.modifier_of("Strength"), -5);

        // Still Ok, still 0.
        store.decrease("Strength").unwrap();
        assert_eq!(store.value_of("Strength"), Some(0));
    }

    #[test]
    fn test_invariant_holds_after_mixed_edits() {
        let mut store = store();
        let edits: [(&str, bool); 9] = [
            ("Strength", true),
            ("Strength", true),
            ("Dexterity", false),
            ("Strength", false),
            ("Dexterity", false),
            ("Dexterity", false),
            ("Strength", true),
            ("Dexterity", true),
            ("Strength", false),
        ];
        for (name, up) in edits {
            if up {
                store.increase(name).unwrap();
            } else {
                store.decrease(name).unwrap();
            }
        }
        for attribute in store.iter() {
            assert_eq!(attribute.modifier(), modifier_for(attribute.value()));
        }
    }

    #[test]
    fn test_mutation_is_strict_on_unknown_names() {
        let mut store = store();
        assert_eq!(
            store.increase("Luck"),
            Err(UnknownAttribute("Luck".to_string()))
        );
        assert_eq!(
            store.decrease("Luck"),
            Err(UnknownAttribute("Luck".to_string()))
        );
    }

    #[test]
    fn test_read_is_lenient_on_unknown_names() {
        let store = store();
        assert_eq!(store.modifier_of("Luck"), 0);
        assert_eq!(store.value_of("Luck"), None);
    }

    #[test]
    fn test_snapshot_does_not_alias_store() {
        let mut store = store();
        let snapshot = store.snapshot();
        store.increase("Strength").unwrap();
        assert_eq!(snapshot[0].value(), 10);
        assert_eq!(store.value_of("Strength"), Some(11));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = AttributeStore::from_names(["Wisdom", "Charisma", "Intelligence"]);
        let names: Vec<&str> = store.iter().map(Attribute::name).collect();
        assert_eq!(names, ["Wisdom", "Charisma", "Intelligence"]);
    }
}
