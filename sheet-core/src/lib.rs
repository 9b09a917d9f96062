//! Character sheet rules engine.
//!
//! This crate provides:
//! - Attribute storage with always-consistent derived modifiers
//! - Skills whose totals are recomputed from attributes on every read
//! - A class catalogue with minimum-attribute eligibility
//! - A session API wrapping the stores behind one serialization boundary
//!
//! # Quick Start
//!
//! ```ignore
//! use sheet_core::{CharacterSession, SheetConfig};
//! use vault::Vault;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = CharacterSession::new(SheetConfig::standard())?;
//!
//!     session.increase_attribute("Dexterity")?;
//!     session.increase_skill("Stealth")?;
//!     println!("Stealth total: {}", session.skill_total("Stealth")?);
//!
//!     let vault = Vault::from_env()?;
//!     session.save(&vault).await?;
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod classes;
pub mod config;
pub mod document;
pub mod session;
pub mod skills;
pub mod testing;

// Primary public API
pub use attributes::{Attribute, AttributeStore, UnknownAttribute};
pub use classes::{ClassCatalog, ClassDef, Requirement, UnknownClass};
pub use config::{ConfigError, SheetConfig, SkillBinding};
pub use document::{CharacterDocument, SkillRecord};
pub use session::{CharacterSession, SessionError, SheetId};
pub use skills::{Skill, SkillStore, UnknownSkill};
pub use testing::{MockVault, TestHarness};
