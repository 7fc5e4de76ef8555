//! Validation of rules content.
//!
//! Checks that every skill definition honours its own invariants and that
//! aging brackets tile the age axis. Errors stop the catalog or table from
//! being built; warnings are logged and otherwise ignored.

use hq_core::{MAXIMUM_SKILL_LEVEL, SkillId};

use crate::aging::{AgingBracket, AgingMilestone};
use crate::catalog::{DISABLED_COST, SkillDefinition};
use crate::dice::{MAXIMUM_CHECK_ROLL, MINIMUM_CHECK_ROLL};
use crate::error::{MechError, MechResult};

/// A warning or error found in a skill definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The skill where the issue was found.
    pub skill: SkillId,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(skill: SkillId, message: impl Into<String>) -> Self {
        Self {
            skill,
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(skill: SkillId, message: impl Into<String>) -> Self {
        Self {
            skill,
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.skill, self.message)
    }
}

/// Check a single definition.
pub fn definition_issues(def: &SkillDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let skill = def.id;

    if !(MINIMUM_CHECK_ROLL..=MAXIMUM_CHECK_ROLL).contains(&def.target) {
        issues.push(ValidationIssue::error(
            skill,
            format!(
                "target {} is outside [{MINIMUM_CHECK_ROLL}, {MAXIMUM_CHECK_ROLL}]",
                def.target
            ),
        ));
    }

    if def.second_attribute.is_some() && def.first_attribute.is_none() {
        issues.push(ValidationIssue::error(
            skill,
            "second linked attribute is set without a first",
        ));
    }
    if def.first_attribute.is_some() && def.first_attribute == def.second_attribute {
        issues.push(ValidationIssue::warning(
            skill,
            "both links name the same attribute",
        ));
    }

    let thresholds = def.thresholds.as_array();
    if thresholds.windows(2).any(|w| w[0] >= w[1]) {
        issues.push(ValidationIssue::error(
            skill,
            format!("tier thresholds {thresholds:?} are not strictly increasing"),
        ));
    }
    if def.thresholds.green < 0 {
        issues.push(ValidationIssue::error(
            skill,
            format!("green threshold {} is negative", def.thresholds.green),
        ));
    }
    if def.thresholds.elite > MAXIMUM_SKILL_LEVEL {
        issues.push(ValidationIssue::error(
            skill,
            format!(
                "elite threshold {} is above level {MAXIMUM_SKILL_LEVEL}",
                def.thresholds.elite
            ),
        ));
    }

    let mut disabled_at = None;
    for (level, &cost) in def.costs.iter().enumerate() {
        if cost < 0 && cost != DISABLED_COST {
            issues.push(ValidationIssue::error(
                skill,
                format!("level {level} has negative cost {cost}"),
            ));
        }
        match disabled_at {
            None if cost == DISABLED_COST => disabled_at = Some(level),
            Some(first) if cost != DISABLED_COST => {
                issues.push(ValidationIssue::error(
                    skill,
                    format!("level {level} is purchasable but level {first} is disabled"),
                ));
            }
            _ => {}
        }
    }

    if disabled_at == Some(0) {
        issues.push(ValidationIssue::warning(skill, "no level can be purchased"));
    }
    if !def.uses_level && def.max_level() > 0 {
        issues.push(ValidationIssue::warning(
            skill,
            "levels above 0 are purchasable but the skill ignores its level",
        ));
    }

    issues
}

/// Check every definition in a catalog.
pub fn catalog_issues(definitions: &[SkillDefinition]) -> Vec<ValidationIssue> {
    definitions.iter().flat_map(definition_issues).collect()
}

/// Log every issue and fail on the first error.
pub(crate) fn validate_definitions(definitions: &[SkillDefinition]) -> MechResult<()> {
    let issues = catalog_issues(definitions);
    for issue in &issues {
        if issue.is_error {
            tracing::error!(%issue, "rejected skill definition");
        } else {
            tracing::warn!(%issue, "questionable skill definition");
        }
    }

    match issues.into_iter().find(|i| i.is_error) {
        Some(issue) => Err(MechError::MalformedCatalogEntry {
            skill: issue.skill,
            reason: issue.message,
        }),
        None => Ok(()),
    }
}

/// Check that brackets list every milestone once, in order, and tile
/// `[0, i32::MAX)` without gaps or overlaps.
pub fn aging_issues(brackets: &[AgingBracket]) -> Vec<String> {
    let mut issues = Vec::new();

    let Some(first) = brackets.first() else {
        issues.push("no brackets defined".to_string());
        return issues;
    };
    if first.min_age != 0 {
        issues.push(format!("first bracket starts at {} instead of 0", first.min_age));
    }
    if let Some(last) = brackets.last().filter(|b| b.max_age != i32::MAX) {
        issues.push(format!("last bracket ends at {} and leaves ages uncovered", last.max_age));
    }

    let milestones: Vec<AgingMilestone> = brackets.iter().map(|b| b.milestone).collect();
    if milestones != AgingMilestone::ALL {
        issues.push(format!(
            "milestones {milestones:?} do not match {:?}",
            AgingMilestone::ALL
        ));
    }

    for bracket in brackets {
        if bracket.min_age >= bracket.max_age {
            issues.push(format!(
                "{} bracket is empty: [{}, {})",
                bracket.milestone, bracket.min_age, bracket.max_age
            ));
        }
    }

    for pair in brackets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.max_age != next.min_age {
            let kind = if prev.max_age < next.min_age { "gap" } else { "overlap" };
            issues.push(format!(
                "{kind} between {} (ends {}) and {} (starts {})",
                prev.milestone, prev.max_age, next.milestone, next.min_age
            ));
        }
    }

    issues
}
