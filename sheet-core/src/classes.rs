//! Class catalogue and eligibility evaluation.
//!
//! Classes gate on minimum attribute values. The catalogue is static
//! reference data loaded once at configuration time; eligibility is derived
//! on read against the current attribute store, never cached.

use crate::attributes::AttributeStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup failure for a class name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown class: {0}")]
pub struct UnknownClass(pub String);

/// A single minimum-attribute requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub attribute: String,
    pub minimum: i32,
}

/// A character class and its minimum attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    name: String,
    minimums: Vec<Requirement>,
}

impl ClassDef {
    /// Create a class with no requirements.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimums: Vec::new(),
        }
    }

    /// Add a minimum attribute value.
    pub fn with_minimum(mut self, attribute: impl Into<String>, minimum: i32) -> Self {
        self.minimums.push(Requirement {
            attribute: attribute.into(),
            minimum,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requirement pairs in declaration order, for display and inspection.
    pub fn minimums(&self) -> &[Requirement] {
        &self.minimums
    }

    /// Whether the current attribute values satisfy every minimum.
    ///
    /// A requirement naming an attribute absent from the store fails; the
    /// lenient zero-default applies only to skill modifier reads. A class
    /// with no requirements is vacuously met. Attributes the class does not
    /// name are irrelevant.
    pub fn is_met_by(&self, attributes: &AttributeStore) -> bool {
        self.minimums.iter().all(|requirement| {
            attributes
                .value_of(&requirement.attribute)
                .map_or(false, |value| value >= requirement.minimum)
        })
    }
}

/// Ordered, immutable catalogue of character classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassCatalog {
    classes: Vec<ClassDef>,
}

impl ClassCatalog {
    pub fn new(classes: Vec<ClassDef>) -> Self {
        Self { classes }
    }

    /// Class names in catalogue order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(ClassDef::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Requirement mapping for the named class.
    pub fn requirements_of(&self, name: &str) -> Result<&[Requirement], UnknownClass> {
        self.get(name)
            .map(ClassDef::minimums)
            .ok_or_else(|| UnknownClass(name.to_string()))
    }

    /// Whether the named class's minimums are all satisfied.
    pub fn meets_requirements(
        &self,
        name: &str,
        attributes: &AttributeStore,
    ) -> Result<bool, UnknownClass> {
        self.get(name)
            .map(|class| class.is_met_by(attributes))
            .ok_or_else(|| UnknownClass(name.to_string()))
    }

    /// Names of every class currently satisfied, in catalogue order.
    pub fn eligible_classes<'a>(&'a self, attributes: &'a AttributeStore) -> Vec<&'a str> {
        self.classes
            .iter()
            .filter(|class| class.is_met_by(attributes))
            .map(ClassDef::name)
            .collect()
    }
}
