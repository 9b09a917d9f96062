//! Testing utilities for the sheet engine.
//!
//! This module provides tools for integration testing:
//! - `MockVault` for capturing saves without network calls
//! - `TestHarness` for scripted edit scenarios
//! - Assertion helpers for verifying derived state

use crate::config::SheetConfig;
use crate::document::CharacterDocument;
use crate::session::{CharacterSession, SessionError};

/// A mock persistence collaborator that records submitted documents.
///
/// Use this for deterministic tests of the save flow without a vault
/// endpoint. Each submission is stored in order.
#[derive(Debug, Default)]
pub struct MockVault {
    submitted: Vec<CharacterDocument>,
}

impl MockVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission.
    pub fn submit(&mut self, document: CharacterDocument) {
        self.submitted.push(document);
    }

    /// All documents submitted so far, oldest first.
    pub fn submissions(&self) -> &[CharacterDocument] {
        &self.submitted
    }

    /// The most recent submission, if any.
    pub fn last_submission(&self) -> Option<&CharacterDocument> {
        self.submitted.last()
    }

    pub fn submission_count(&self) -> usize {
        self.submitted.len()
    }
}

/// Test harness pairing a session with a mock vault.
pub struct TestHarness {
    /// The character session under test.
    pub session: CharacterSession,
    /// The mock persistence collaborator.
    pub vault: MockVault,
}

impl TestHarness {
    /// Create a harness over the standard sheet configuration.
    pub fn new() -> Self {
        Self::with_config(SheetConfig::standard())
    }

    /// Create a harness over a custom configuration.
    pub fn with_config(config: SheetConfig) -> Self {
        let session = CharacterSession::new(config).expect("test configuration must validate");
        Self {
            session,
            vault: MockVault::new(),
        }
    }

    /// Increase an attribute `times` times.
    pub fn bump_attribute(&mut self, name: &str, times: u32) -> &mut Self {
        for _ in 0..times {
            self.session
                .increase_attribute(name)
                .expect("known attribute");
        }
        self
    }

    /// Increase a skill `times` times.
    pub fn bump_skill(&mut self, name: &str, times: u32) -> &mut Self {
        for _ in 0..times {
            self.session.increase_skill(name).expect("known skill");
        }
        self
    }

    /// Serialize the session and record the document in the mock vault,
    /// mirroring the real save flow without the network hop.
    pub fn save(&mut self) {
        self.vault.submit(self.session.serialize());
    }

    pub fn modifier_of(&self, name: &str) -> i32 {
        self.session.modifier_of(name)
    }

    pub fn skill_total(&self, name: &str) -> Result<i32, SessionError> {
        self.session.skill_total(name)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert an attribute's current value and modifier.
#[track_caller]
pub fn assert_attribute(harness: &TestHarness, name: &str, value: i32, modifier: i32) {
    let actual_value = harness.session.attribute_value(name);
    let actual_modifier = harness.session.modifier_of(name);
    assert_eq!(
        (actual_value, actual_modifier),
        (Some(value), modifier),
        "Expected {name} at {value} (modifier {modifier}), got {actual_value:?} (modifier {actual_modifier})"
    );
}

/// Assert a skill's current total.
#[track_caller]
pub fn assert_total(harness: &TestHarness, name: &str, total: i32) {
    let actual = harness
        .session
        .skill_total(name)
        .unwrap_or_else(|e| panic!("skill {name} should exist: {e}"));
    assert_eq!(actual, total, "Expected {name} total {total}, got {actual}");
}

/// Assert the character qualifies for a class.
#[track_caller]
pub fn assert_eligible(harness: &TestHarness, class: &str) {
    let eligible = harness
        .session
        .is_eligible(class)
        .unwrap_or_else(|e| panic!("class {class} should exist: {e}"));
    assert!(eligible, "Expected to qualify for {class}");
}

/// Assert the character does NOT qualify for a class.
#[track_caller]
pub fn assert_not_eligible(harness: &TestHarness, class: &str) {
    let eligible = harness
        .session
        .is_eligible(class)
        .unwrap_or_else(|e| panic!("class {class} should exist: {e}"));
    assert!(!eligible, "Expected to NOT qualify for {class}");
}
