//! The skill catalog: validated, read-only skill definitions.
//!
//! A [`SkillCatalog`] is built once, checked against every content
//! invariant, and then shared by reference. It holds exactly one
//! definition per [`SkillId`], so lookups by handle cannot fail; only the
//! name boundary ([`SkillCatalog::lookup`]) can report an unknown skill.

pub mod definition;
pub mod registry;
pub mod tier;

pub use definition::{COST_TABLE_LEN, DISABLED_COST, SkillDefinition};
pub use tier::{ExperienceTier, TierThresholds};

use hq_core::SkillId;

use crate::error::{MechError, MechResult};
use crate::validate::validate_definitions;

/// Immutable registry of skill definitions indexed by [`SkillId`].
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    definitions: Vec<SkillDefinition>,
}

impl SkillCatalog {
    /// Build a catalog, validating every definition.
    ///
    /// The definitions may come in any order but must cover every skill
    /// exactly once.
    pub fn new(definitions: Vec<SkillDefinition>) -> MechResult<Self> {
        validate_definitions(&definitions)?;

        let mut slots: Vec<Option<SkillDefinition>> = vec![None; SkillId::ALL.len()];
        for def in definitions {
            let slot = &mut slots[def.id.index()];
            if slot.is_some() {
                return Err(MechError::DuplicateCatalogEntry(def.id));
            }
            *slot = Some(def);
        }

        let definitions = slots
            .into_iter()
            .zip(SkillId::ALL)
            .map(|(slot, id)| slot.ok_or(MechError::MissingCatalogEntry(*id)))
            .collect::<MechResult<Vec<_>>>()?;

        tracing::debug!(skills = definitions.len(), "skill catalog validated");
        Ok(Self { definitions })
    }

    /// The standard catalog.
    pub fn standard() -> MechResult<Self> {
        Self::new(registry::standard_definitions())
    }

    /// Replace definitions with ones read from a JSON array and re-validate.
    ///
    /// Each entry names the skill it replaces; skills not mentioned keep
    /// their current definition. Naming the same skill twice is an error.
    pub fn with_overrides_json(self, json: &str) -> MechResult<Self> {
        let overrides: Vec<SkillDefinition> = serde_json::from_str(json)?;
        let mut replaced = vec![false; SkillId::ALL.len()];
        let mut definitions = self.definitions;
        for def in overrides {
            let index = def.id.index();
            if std::mem::replace(&mut replaced[index], true) {
                return Err(MechError::DuplicateCatalogEntry(def.id));
            }
            tracing::debug!(skill = %def.id, "overriding skill definition");
            definitions[index] = def;
        }
        Self::new(definitions)
    }

    /// The definition for a skill handle.
    pub fn get(&self, id: SkillId) -> &SkillDefinition {
        &self.definitions[id.index()]
    }

    /// Resolve a skill name to its definition.
    pub fn lookup(&self, name: &str) -> MechResult<&SkillDefinition> {
        self.skill_id(name).map(|id| self.get(id))
    }

    /// Resolve a skill name to its handle.
    pub fn skill_id(&self, name: &str) -> MechResult<SkillId> {
        SkillId::from_name(name).ok_or_else(|| MechError::UnknownSkill(name.to_string()))
    }

    /// All definitions in [`SkillId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> + '_ {
        self.definitions.iter()
    }
}
