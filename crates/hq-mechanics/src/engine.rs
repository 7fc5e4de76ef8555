//! The skill engine: resolves checks for people against the catalog.
//!
//! A [`SkillEngine`] owns the validated catalog and aging table plus the
//! campaign options. It is immutable once built and can be shared across
//! threads; every check takes its dice from a caller-supplied
//! [`RollSource`] so results are reproducible.

use chrono::NaiveDate;
use hq_core::Person;

use crate::aging::{AgingBracket, AgingModifiers, AgingTable};
use crate::catalog::SkillCatalog;
use crate::config::EngineConfig;
use crate::dice::{DiceRoller, RollSource};
use crate::error::MechResult;
use crate::modifier::{self, TargetNumber};
use crate::resolution::{CheckOutcome, CheckRequest, MarginOfSuccess};

/// Check resolution over a catalog and aging table.
#[derive(Debug, Clone)]
pub struct SkillEngine {
    catalog: SkillCatalog,
    aging: AgingTable,
    config: EngineConfig,
}

impl SkillEngine {
    /// Assemble an engine from already validated parts.
    pub fn new(catalog: SkillCatalog, aging: AgingTable, config: EngineConfig) -> Self {
        Self {
            catalog,
            aging,
            config,
        }
    }

    /// The standard catalog and aging table with default options.
    pub fn standard() -> MechResult<Self> {
        Ok(Self::new(
            SkillCatalog::standard()?,
            AgingTable::standard()?,
            EngineConfig::default(),
        ))
    }

    /// Replace the campaign options.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The skill catalog.
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// The aging table.
    pub fn aging(&self) -> &AgingTable {
        &self.aging
    }

    /// The campaign options.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A 2d6 roller seeded from the configuration.
    pub fn roller(&self) -> DiceRoller {
        DiceRoller::new(self.config.seed)
    }

    /// The aging bracket a person is in on a date.
    pub fn bracket_for(&self, person: &Person, date: NaiveDate) -> &AgingBracket {
        self.aging.bracket_for(person.age_at(date))
    }

    /// Aging totals that apply to a request, if any.
    fn aging_for(&self, person: &Person, request: &CheckRequest) -> Option<&AgingModifiers> {
        if request.ignore_age || !self.config.use_aging_effects {
            return None;
        }
        let Some(date) = request.as_of else {
            tracing::debug!(
                person = %person.id,
                skill = %request.skill,
                "no date on request, aging skipped"
            );
            return None;
        };
        Some(self.aging.cumulative_for_age(person.age_at(date)))
    }

    /// The target number a person must roll for a request.
    pub fn target_number(&self, person: &Person, request: &CheckRequest) -> TargetNumber {
        modifier::target_number(
            self.catalog.get(request.skill),
            &person.attributes,
            self.aging_for(person, request),
            person.skill(request.skill),
            &request.modifiers,
        )
    }

    /// Resolve a check.
    ///
    /// A missing person yields [`CheckOutcome::missing_person`]. A failed
    /// first roll is re-rolled once when the request allows Edge, the
    /// options enable it and the person has Edge left; the person is not
    /// changed, so the caller spends the point when `edge_used` is set.
    pub fn resolve<R>(
        &self,
        person: Option<&Person>,
        request: &CheckRequest,
        rolls: &mut R,
    ) -> CheckOutcome
    where
        R: RollSource + ?Sized,
    {
        let Some(person) = person else {
            tracing::debug!(skill = %request.skill, "check without a person");
            return CheckOutcome::missing_person();
        };

        let target = self.target_number(person, request);
        let mut roll = rolls.roll();
        let mut margin = roll.saturating_sub(target.value);

        let mut edge_used = false;
        if margin < 0 && request.allow_edge && self.config.use_edge && person.edge > 0 {
            roll = rolls.roll();
            margin = roll.saturating_sub(target.value);
            edge_used = true;
        }

        let band = MarginOfSuccess::classify(margin);
        let mut result_text = format!(
            "{} rolled {roll} against a target number of {}: {band}",
            person.name, target.value
        );
        if edge_used {
            result_text.push_str(" (Edge used)");
        }

        tracing::debug!(
            person = %person.id,
            skill = %request.skill,
            target = target.value,
            roll,
            margin,
            band = %band,
            edge_used,
            "resolved check"
        );

        CheckOutcome {
            target_number: target.value,
            roll,
            margin,
            margin_of_success: band,
            result_text,
            edge_used,
            modifiers: Some(target.modifiers),
        }
    }

    /// Resolve a plain check for a skill given by name.
    pub fn resolve_named<R>(
        &self,
        person: Option<&Person>,
        skill: &str,
        rolls: &mut R,
    ) -> MechResult<CheckOutcome>
    where
        R: RollSource + ?Sized,
    {
        let request = self.request(skill)?;
        Ok(self.resolve(person, &request, rolls))
    }

    /// Start a request for a skill given by name.
    pub fn request(&self, skill: &str) -> MechResult<CheckRequest> {
        self.catalog.skill_id(skill).map(CheckRequest::new)
    }

    /// Returns true if the check succeeds.
    pub fn quick_check<R>(
        &self,
        person: Option<&Person>,
        request: &CheckRequest,
        rolls: &mut R,
    ) -> bool
    where
        R: RollSource + ?Sized,
    {
        self.resolve(person, request, rolls).is_success()
    }
}
