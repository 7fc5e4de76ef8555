//! Modifier aggregation: from attributes, aging, situation and training to
//! a single target number.
//!
//! A check succeeds when the roll meets the target number, so every
//! positive modifier makes the check easier by lowering the target.

use std::fmt;

use hq_core::{Attribute, AttributeSet, SkillInstance};
use serde::{Deserialize, Serialize};

use crate::aging::AgingModifiers;
use crate::catalog::SkillDefinition;

/// Target base for an untrained check in an unlinked or single-linked skill.
pub const UNTRAINED_BASE_ONE_LINK: i32 = 9;

/// Target base for an untrained check in a dual-linked skill.
pub const UNTRAINED_BASE_TWO_LINK: i32 = 10;

/// Penalty applied to every untrained check.
pub const UNTRAINED_PENALTY: i32 = 2;

/// Modifier an attribute score contributes to linked checks.
///
/// Scores above the normal maximum land in the +5 bucket and negative
/// scores in the -4 bucket.
pub fn attribute_modifier(score: i32) -> i32 {
    match score {
        i32::MIN..=0 => -4,
        1 => -2,
        2..=3 => -1,
        4..=6 => 0,
        7..=9 => 1,
        10 => 2,
        _ => 5,
    }
}

/// Where a situational modifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    /// Wounds and lasting injuries.
    Injury,
    /// Reputation, already scaled by the caller.
    Reputation,
    /// A campaign special option or trait.
    SpecialOption,
    /// Anything else the caller wants to add.
    Extra,
}

impl fmt::Display for ModifierSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Injury => "injury",
            Self::Reputation => "reputation",
            Self::SpecialOption => "special option",
            Self::Extra => "extra",
        };
        write!(f, "{label}")
    }
}

/// A caller-supplied modifier. Positive values make the check easier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationalModifier {
    /// Where the modifier comes from.
    pub source: ModifierSource,
    /// Signed value.
    pub value: i32,
}

impl SituationalModifier {
    /// A modifier from any source.
    pub fn new(source: ModifierSource, value: i32) -> Self {
        Self { source, value }
    }

    /// An injury modifier, usually negative.
    pub fn injury(value: i32) -> Self {
        Self::new(ModifierSource::Injury, value)
    }

    /// A reputation modifier.
    pub fn reputation(value: i32) -> Self {
        Self::new(ModifierSource::Reputation, value)
    }

    /// A special option modifier.
    pub fn special_option(value: i32) -> Self {
        Self::new(ModifierSource::SpecialOption, value)
    }

    /// Any other modifier.
    pub fn extra(value: i32) -> Self {
        Self::new(ModifierSource::Extra, value)
    }
}

/// The components that make up a check's total modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierBreakdown {
    /// Sum of linked attribute modifiers.
    pub attributes: i32,
    /// Sum of cumulative aging modifiers for the linked attributes.
    pub aging: i32,
    /// Sum of situational modifiers.
    pub situational: i32,
    /// Skill level (when it counts) plus the instance bonus.
    pub skill: i32,
    /// Untrained penalty, zero or negative.
    pub untrained_penalty: i32,
}

impl ModifierBreakdown {
    /// Sum of every component, saturating.
    pub fn total(&self) -> i32 {
        self.attributes
            .saturating_add(self.aging)
            .saturating_add(self.situational)
            .saturating_add(self.skill)
            .saturating_add(self.untrained_penalty)
    }
}

impl fmt::Display for ModifierBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attributes {:+}, aging {:+}, situational {:+}, skill {:+}",
            self.attributes, self.aging, self.situational, self.skill
        )?;
        if self.untrained_penalty != 0 {
            write!(f, ", untrained {:+}", self.untrained_penalty)?;
        }
        write!(f, " = {:+}", self.total())
    }
}

/// A computed target number and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetNumber {
    /// The number a roll must meet.
    pub value: i32,
    /// The base the modifiers were subtracted from.
    pub base: i32,
    /// Whether the trained path was used.
    pub trained: bool,
    /// The modifier components.
    pub modifiers: ModifierBreakdown,
}

/// Compute the target number for a check.
///
/// `aging` is `None` when aging is ignored. `instance` is `None` for an
/// untrained check.
pub fn target_number(
    def: &SkillDefinition,
    attributes: &AttributeSet,
    aging: Option<&AgingModifiers>,
    instance: Option<&SkillInstance>,
    situational: &[SituationalModifier],
) -> TargetNumber {
    let links: Vec<Attribute> = def.linked_attributes().collect();

    let mut modifiers = ModifierBreakdown {
        attributes: links
            .iter()
            .map(|&a| attribute_modifier(attributes.get(a)))
            .fold(0, i32::saturating_add),
        aging: aging.map_or(0, |aging| {
            links
                .iter()
                .map(|&a| aging.attribute(a))
                .fold(0, i32::saturating_add)
        }),
        situational: situational
            .iter()
            .map(|m| m.value)
            .fold(0, i32::saturating_add),
        ..ModifierBreakdown::default()
    };

    let base = match instance {
        Some(instance) => {
            let level = if def.uses_level { instance.level() } else { 0 };
            modifiers.skill = level.saturating_add(instance.bonus);
            def.target
        }
        None => {
            modifiers.untrained_penalty = -UNTRAINED_PENALTY;
            if def.is_dual_linked() {
                UNTRAINED_BASE_TWO_LINK
            } else {
                UNTRAINED_BASE_ONE_LINK
            }
        }
    };

    TargetNumber {
        value: base.saturating_sub(modifiers.total()),
        base,
        trained: instance.is_some(),
        modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aging::{AgingMilestone, AgingTable};
    use crate::catalog::SkillCatalog;
    use hq_core::SkillId;
    use proptest::prelude::*;

    fn catalog() -> SkillCatalog {
        SkillCatalog::standard().unwrap()
    }

    #[test]
    fn step_function_fixed_points() {
        assert_eq!(attribute_modifier(-10), -4);
        assert_eq!(attribute_modifier(0), -4);
        assert_eq!(attribute_modifier(1), -2);
        assert_eq!(attribute_modifier(2), -1);
        assert_eq!(attribute_modifier(3), -1);
        assert_eq!(attribute_modifier(4), 0);
        assert_eq!(attribute_modifier(6), 0);
        assert_eq!(attribute_modifier(7), 1);
        assert_eq!(attribute_modifier(9), 1);
        assert_eq!(attribute_modifier(10), 2);
        assert_eq!(attribute_modifier(11), 5);
        assert_eq!(attribute_modifier(99), 5);
        assert_eq!(attribute_modifier(300), 5);
    }

    #[test]
    fn untrained_single_link() {
        let catalog = catalog();
        let running = catalog.get(SkillId::Running);
        let attrs = AttributeSet::new().with(Attribute::Reflexes, 7);
        let tn = target_number(running, &attrs, None, None, &[]);
        assert!(!tn.trained);
        assert_eq!(tn.base, UNTRAINED_BASE_ONE_LINK);
        assert_eq!(tn.modifiers.attributes, 1);
        assert_eq!(tn.modifiers.untrained_penalty, -2);
        assert_eq!(tn.value, 10);
    }

    #[test]
    fn untrained_dual_link_uses_higher_base() {
        let catalog = catalog();
        let piloting = catalog.get(SkillId::PilotingMek);
        let tn = target_number(piloting, &AttributeSet::new(), None, None, &[]);
        assert_eq!(tn.base, UNTRAINED_BASE_TWO_LINK);
        assert_eq!(tn.value, 12);
    }

    #[test]
    fn untrained_unlinked_uses_one_link_base() {
        let catalog = catalog();
        let career = catalog.get(SkillId::CareerSoldier);
        let tn = target_number(career, &AttributeSet::new(), None, None, &[]);
        assert_eq!(tn.base, UNTRAINED_BASE_ONE_LINK);
        assert_eq!(tn.modifiers.attributes, 0);
        assert_eq!(tn.value, 11);
    }

    #[test]
    fn trained_adds_level_and_bonus() {
        let catalog = catalog();
        let gunnery = catalog.get(SkillId::GunneryMek);
        let attrs = AttributeSet::new().with(Attribute::Dexterity, 10);
        let instance = SkillInstance::new(SkillId::GunneryMek, 3).with_bonus(1);
        let tn = target_number(gunnery, &attrs, None, Some(&instance), &[]);
        assert!(tn.trained);
        assert_eq!(tn.base, 7);
        assert_eq!(tn.modifiers.attributes, 2);
        assert_eq!(tn.modifiers.skill, 4);
        assert_eq!(tn.value, 1);
    }

    #[test]
    fn trained_ignores_level_when_skill_does_not_use_it() {
        let catalog = catalog();
        let astech = catalog.get(SkillId::Astech);
        let instance = SkillInstance::new(SkillId::Astech, 4);
        let tn = target_number(astech, &AttributeSet::new(), None, Some(&instance), &[]);
        assert_eq!(tn.modifiers.skill, 0);
        assert_eq!(tn.value, astech.target);
    }

    #[test]
    fn situational_modifiers_make_checks_easier() {
        let catalog = catalog();
        let doctor = catalog.get(SkillId::Doctor);
        let instance = SkillInstance::new(SkillId::Doctor, 2);
        let attrs = AttributeSet::new();
        let plain = target_number(doctor, &attrs, None, Some(&instance), &[]);
        let mods = [
            SituationalModifier::injury(-1),
            SituationalModifier::reputation(2),
            SituationalModifier::extra(1),
        ];
        let modified = target_number(doctor, &attrs, None, Some(&instance), &mods);
        assert_eq!(modified.modifiers.situational, 2);
        assert_eq!(modified.value, plain.value - 2);
    }

    #[test]
    fn aging_applies_to_linked_attributes_only() {
        let catalog = catalog();
        let table = AgingTable::standard().unwrap();
        let aging = table.cumulative(AgingMilestone::OneHundredOne);
        let attrs = AttributeSet::new();

        // Running links Reflexes only: -4 at 101+.
        let running = catalog.get(SkillId::Running);
        let tn = target_number(running, &attrs, Some(aging), None, &[]);
        assert_eq!(tn.modifiers.aging, -4);
        assert_eq!(tn.value, 15);

        // Doctor links Intelligence and Dexterity: -2 + -5.
        let doctor = catalog.get(SkillId::Doctor);
        let tn = target_number(doctor, &attrs, Some(aging), None, &[]);
        assert_eq!(tn.modifiers.aging, -7);

        let career = catalog.get(SkillId::CareerSoldier);
        let tn = target_number(career, &attrs, Some(aging), None, &[]);
        assert_eq!(tn.modifiers.aging, 0);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let catalog = catalog();
        let running = catalog.get(SkillId::Running);
        let mods = [SituationalModifier::extra(i32::MIN), SituationalModifier::extra(-1)];
        let tn = target_number(running, &AttributeSet::new(), None, None, &mods);
        assert_eq!(tn.modifiers.situational, i32::MIN);
        assert_eq!(tn.value, i32::MAX);
    }

    #[test]
    fn breakdown_display() {
        let breakdown = ModifierBreakdown {
            attributes: 1,
            aging: -1,
            situational: 0,
            skill: 3,
            untrained_penalty: 0,
        };
        assert_eq!(
            breakdown.to_string(),
            "attributes +1, aging -1, situational +0, skill +3 = +3"
        );
    }

    proptest! {
        #[test]
        fn step_function_is_monotonic(a in any::<i32>(), b in any::<i32>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(attribute_modifier(lo) <= attribute_modifier(hi));
        }

        #[test]
        fn step_function_is_bounded(score in any::<i32>()) {
            prop_assert!((-4..=5).contains(&attribute_modifier(score)));
        }
    }
}
