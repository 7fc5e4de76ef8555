//! Skill advancement and aging drift.
//!
//! XP buys skill levels one at a time at the catalog's price, with a
//! surcharge for slow learners. Roster passes (training and birthdays)
//! touch each person once and run in parallel.

use std::fmt;

use chrono::NaiveDate;
use hq_core::{Attribute, Person, SkillId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aging::AgingMilestone;
use crate::catalog::DISABLED_COST;
use crate::engine::SkillEngine;
use crate::resolution::CheckOutcome;

/// Extra XP slow learners pay, in percent of the base cost.
pub const SLOW_LEARNER_SURCHARGE_PERCENT: i32 = 20;

/// XP every trainee gets from a lesson before the instructor's result.
pub const TRAINING_BASE_XP: i32 = 1;

/// Result of trying to buy the next level of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advancement {
    /// The level was bought.
    Improved {
        /// The skill improved.
        skill: SkillId,
        /// The new level.
        level: i32,
        /// XP spent.
        cost: i32,
    },
    /// No further level can be bought.
    AtMaximum {
        /// The skill in question.
        skill: SkillId,
    },
    /// The person cannot afford the next level.
    InsufficientXp {
        /// The skill in question.
        skill: SkillId,
        /// XP the next level costs.
        needed: i32,
        /// XP the person has.
        available: i32,
    },
}

impl fmt::Display for Advancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Improved { skill, level, cost } => {
                write!(f, "{skill} improved to {level} for {cost} XP")
            }
            Self::AtMaximum { skill } => write!(f, "{skill} is at its maximum"),
            Self::InsufficientXp {
                skill,
                needed,
                available,
            } => write!(f, "{skill} needs {needed} XP, only {available} available"),
        }
    }
}

fn with_surcharge(cost: i32) -> i32 {
    cost.saturating_mul(100 + SLOW_LEARNER_SURCHARGE_PERCENT)
        .saturating_add(99)
        / 100
}

/// XP price of the next level of a skill, or `None` if none can be bought.
///
/// An untrained skill costs its level 0 price. Skills that ignore their
/// level have nothing to buy once trained. With a date, slow learners pay
/// the surcharge, rounded up.
pub fn next_level_cost(
    engine: &SkillEngine,
    person: &Person,
    skill: SkillId,
    as_of: Option<NaiveDate>,
) -> Option<i32> {
    let def = engine.catalog().get(skill);
    let next = match person.skill(skill) {
        None => 0,
        Some(_) if !def.uses_level => return None,
        Some(instance) => instance.level() + 1,
    };

    let cost = def.cost(next);
    if cost == DISABLED_COST {
        return None;
    }

    let slow = engine.config().use_aging_effects
        && as_of.is_some_and(|date| engine.bracket_for(person, date).slow_learner);
    Some(if slow { with_surcharge(cost) } else { cost })
}

/// Spend XP on the next level of a skill.
pub fn improve_skill(
    engine: &SkillEngine,
    person: &mut Person,
    skill: SkillId,
    as_of: Option<NaiveDate>,
) -> Advancement {
    let Some(cost) = next_level_cost(engine, person, skill, as_of) else {
        return Advancement::AtMaximum { skill };
    };
    if cost > person.xp {
        return Advancement::InsufficientXp {
            skill,
            needed: cost,
            available: person.xp,
        };
    }

    let level = person.skill(skill).map_or(0, |i| i.level() + 1);
    person.xp -= cost;
    person.set_skill_level(skill, level);
    tracing::debug!(person = %person.id, %skill, level, cost, "skill improved");

    Advancement::Improved { skill, level, cost }
}

/// XP each trainee earns from a lesson with the given instructor result.
pub fn lesson_xp(lesson: &CheckOutcome) -> i32 {
    TRAINING_BASE_XP.saturating_add(lesson.degree()).max(0)
}

/// Award lesson XP to every trainee. Returns the XP each one received.
pub fn train_roster(trainees: &mut [Person], lesson: &CheckOutcome) -> i32 {
    let award = lesson_xp(lesson);
    if award > 0 {
        trainees
            .par_iter_mut()
            .for_each(|p| p.xp = p.xp.saturating_add(award));
    }
    tracing::info!(
        trainees = trainees.len(),
        award,
        band = %lesson.margin_of_success,
        "training pass complete"
    );
    award
}

/// Apply the deltas of every bracket a person enters between two ages.
///
/// Returns the milestones crossed. Does nothing when aging effects are
/// off. Hosts that apply drift this way should resolve checks with
/// `ignore_age` so the same brackets are not counted twice.
pub fn apply_aging(
    engine: &SkillEngine,
    person: &mut Person,
    from_age: i32,
    to_age: i32,
) -> Vec<AgingMilestone> {
    if !engine.config().use_aging_effects {
        return Vec::new();
    }

    let mut crossed = Vec::new();
    for bracket in engine.aging().milestones_between(from_age, to_age) {
        for attribute in Attribute::ALL {
            let delta = bracket.delta(attribute);
            if delta != 0 {
                person.attributes.change(attribute, delta);
            }
        }
        crossed.push(bracket.milestone);
    }
    if !crossed.is_empty() {
        tracing::debug!(person = %person.id, ?crossed, "aging applied");
    }
    crossed
}

/// Age a roster from one date to another. Returns how many people
/// crossed at least one milestone.
pub fn age_roster(
    engine: &SkillEngine,
    people: &mut [Person],
    from: NaiveDate,
    to: NaiveDate,
) -> usize {
    let changed = people
        .par_iter_mut()
        .map(|person| {
            let (from_age, to_age) = (person.age_at(from), person.age_at(to));
            apply_aging(engine, person, from_age, to_age)
        })
        .filter(|crossed| !crossed.is_empty())
        .count();
    tracing::info!(people = people.len(), changed, %from, %to, "aging pass complete");
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::dice::FixedRoll;
    use crate::resolution::{CheckRequest, MarginOfSuccess};
    use hq_core::AttributeSet;

    fn engine() -> SkillEngine {
        SkillEngine::standard().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recruit() -> Person {
        Person::new("Recruit", date(3040, 3, 1)).with_xp(100)
    }

    fn lesson(band: MarginOfSuccess) -> CheckOutcome {
        let engine = engine();
        let instructor = recruit().with_skill(SkillId::Training, 3);
        let request = CheckRequest::new(SkillId::Training);
        // Training target for level 3 with default attributes is 6.
        let roll = 6 + band.lower().max(-10);
        let outcome = engine.resolve(Some(&instructor), &request, &mut FixedRoll(roll));
        assert_eq!(outcome.margin_of_success, band);
        outcome
    }

    #[test]
    fn untrained_skill_costs_level_zero() {
        let engine = engine();
        let person = recruit();
        assert_eq!(next_level_cost(&engine, &person, SkillId::GunneryMek, None), Some(8));
    }

    #[test]
    fn trained_skill_costs_next_level() {
        let engine = engine();
        let person = recruit().with_skill(SkillId::GunneryMek, 3);
        assert_eq!(next_level_cost(&engine, &person, SkillId::GunneryMek, None), Some(16));
    }

    #[test]
    fn nothing_to_buy_past_the_cap() {
        let engine = engine();
        let maxed = recruit().with_skill(SkillId::GunneryMek, 10);
        assert_eq!(next_level_cost(&engine, &maxed, SkillId::GunneryMek, None), None);

        let capped = recruit().with_skill(SkillId::Acting, 5);
        assert_eq!(next_level_cost(&engine, &capped, SkillId::Acting, None), None);

        let astech = recruit().with_skill(SkillId::Astech, 0);
        assert_eq!(next_level_cost(&engine, &astech, SkillId::Astech, None), None);
    }

    #[test]
    fn slow_learners_pay_more() {
        let engine = engine();
        let person = Person::new("Grandpa", date(2980, 1, 1)).with_skill(SkillId::GunneryMek, 2);
        let young = date(3020, 1, 1);
        let old = date(3045, 1, 1);
        assert_eq!(next_level_cost(&engine, &person, SkillId::GunneryMek, Some(young)), Some(12));
        // 12 * 1.2 = 14.4, rounded up
        assert_eq!(next_level_cost(&engine, &person, SkillId::GunneryMek, Some(old)), Some(15));

        let ageless = engine.with_config(EngineConfig::default().with_aging_effects(false));
        assert_eq!(next_level_cost(&ageless, &person, SkillId::GunneryMek, Some(old)), Some(12));
    }

    #[test]
    fn surcharge_rounds_up() {
        assert_eq!(with_surcharge(10), 12);
        assert_eq!(with_surcharge(8), 10);
        assert_eq!(with_surcharge(0), 0);
    }

    #[test]
    fn improve_spends_xp() {
        let engine = engine();
        let mut person = recruit();
        let first = improve_skill(&engine, &mut person, SkillId::GunneryMek, None);
        assert_eq!(
            first,
            Advancement::Improved {
                skill: SkillId::GunneryMek,
                level: 0,
                cost: 8
            }
        );
        let second = improve_skill(&engine, &mut person, SkillId::GunneryMek, None);
        assert_eq!(
            second,
            Advancement::Improved {
                skill: SkillId::GunneryMek,
                level: 1,
                cost: 4
            }
        );
        assert_eq!(person.xp, 88);
        assert_eq!(person.skill(SkillId::GunneryMek).map(|i| i.level()), Some(1));
    }

    #[test]
    fn improve_reports_shortfall_and_cap() {
        let engine = engine();
        let mut poor = recruit().with_xp(3).with_skill(SkillId::Tactics, 4);
        assert_eq!(
            improve_skill(&engine, &mut poor, SkillId::Tactics, None),
            Advancement::InsufficientXp {
                skill: SkillId::Tactics,
                needed: 60,
                available: 3
            }
        );
        assert_eq!(poor.xp, 3);

        let mut maxed = recruit().with_skill(SkillId::Tactics, 10);
        let result = improve_skill(&engine, &mut maxed, SkillId::Tactics, None);
        assert_eq!(result, Advancement::AtMaximum { skill: SkillId::Tactics });
        assert_eq!(result.to_string(), "Tactics is at its maximum");
    }

    #[test]
    fn lesson_xp_follows_instructor_result() {
        assert_eq!(lesson_xp(&lesson(MarginOfSuccess::Spectacular)), 5);
        assert_eq!(lesson_xp(&lesson(MarginOfSuccess::BarelyMadeIt)), 1);
        assert_eq!(lesson_xp(&lesson(MarginOfSuccess::Almost)), 0);
        assert_eq!(lesson_xp(&lesson(MarginOfSuccess::Disastrous)), 0);
        assert_eq!(lesson_xp(&CheckOutcome::missing_person()), 0);
    }

    #[test]
    fn training_pass_awards_everyone() {
        let mut roster: Vec<Person> = (0..8).map(|_| recruit()).collect();
        let award = train_roster(&mut roster, &lesson(MarginOfSuccess::Good));
        assert_eq!(award, 3);
        assert!(roster.iter().all(|p| p.xp == 103));

        let nothing = train_roster(&mut roster, &lesson(MarginOfSuccess::Bad));
        assert_eq!(nothing, 0);
        assert!(roster.iter().all(|p| p.xp == 103));
    }

    #[test]
    fn apply_aging_uses_each_bracket_once() {
        let engine = engine();
        let mut person = recruit().with_attributes(AttributeSet::new());
        let crossed = apply_aging(&engine, &mut person, 24, 41);
        assert_eq!(
            crossed,
            vec![
                AgingMilestone::TwentyFive,
                AgingMilestone::ThirtyOne,
                AgingMilestone::FortyOne
            ]
        );
        assert_eq!(person.attributes.get(Attribute::Intelligence), 6);
        assert_eq!(person.attributes.get(Attribute::Willpower), 6);
        assert_eq!(person.attributes.get(Attribute::Charisma), 6);
        assert_eq!(person.attributes.get(Attribute::Dexterity), 4);

        assert!(apply_aging(&engine, &mut person, 41, 41).is_empty());
        assert!(apply_aging(&engine, &mut person, 42, 50).is_empty());
    }

    #[test]
    fn apply_aging_respects_config() {
        let engine = engine().with_config(EngineConfig::default().with_aging_effects(false));
        let mut person = recruit();
        assert!(apply_aging(&engine, &mut person, 0, 120).is_empty());
        assert_eq!(person.attributes, AttributeSet::new());
    }

    #[test]
    fn aging_pass_over_roster() {
        let engine = engine();
        let mut roster = vec![
            Person::new("Turning 25", date(3000, 6, 1)),
            Person::new("Turning 26", date(2999, 6, 1)),
            Person::new("Turning 61", date(2964, 6, 1)),
        ];
        let changed = age_roster(&engine, &mut roster, date(3025, 1, 1), date(3025, 12, 31));
        assert_eq!(changed, 2);
        assert_eq!(roster[0].attributes.get(Attribute::Intelligence), 6);
        assert_eq!(roster[1].attributes, AttributeSet::new());
        assert_eq!(roster[2].attributes.get(Attribute::Strength), 4);
    }
}
