use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::attribute::AttributeSet;
use crate::skill::{SkillId, SkillInstance};

/// Unique identifier for every person in the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    /// Generate a new random person ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The slice of a personnel record the rules engine reads and writes.
///
/// Everything else about a person (rank, unit, portrait, history) belongs
/// to the host application's own record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Date of birth, used to resolve age on a given campaign date.
    pub birth_date: NaiveDate,
    /// The seven attribute scores.
    pub attributes: AttributeSet,
    /// Trained skills. A skill missing from the map is untrained.
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: BTreeMap<SkillId, SkillInstance>,
    /// Edge points left for re-rolling failed checks.
    #[serde(default)]
    pub edge: u32,
    /// Unspent experience points.
    #[serde(default)]
    pub xp: i32,
}

impl Person {
    /// Create a person with default attributes and no skills.
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            birth_date,
            attributes: AttributeSet::default(),
            skills: BTreeMap::new(),
            edge: 0,
            xp: 0,
        }
    }

    /// Replace the attribute set.
    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add or replace a trained skill.
    pub fn with_skill(mut self, skill: SkillId, level: i32) -> Self {
        self.set_skill_level(skill, level);
        self
    }

    /// Set the Edge pool.
    pub fn with_edge(mut self, edge: u32) -> Self {
        self.edge = edge;
        self
    }

    /// Set unspent XP.
    pub fn with_xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    /// Whole years of age on the given date.
    ///
    /// Dates before the birth date yield 0.
    pub fn age_at(&self, date: NaiveDate) -> i32 {
        date.years_since(self.birth_date)
            .map_or(0, |years| i32::try_from(years).unwrap_or(i32::MAX))
    }

    /// The trained instance of a skill, if any.
    pub fn skill(&self, skill: SkillId) -> Option<&SkillInstance> {
        self.skills.get(&skill)
    }

    /// Mutable access to a trained skill, if any.
    pub fn skill_mut(&mut self, skill: SkillId) -> Option<&mut SkillInstance> {
        self.skills.get_mut(&skill)
    }

    /// Returns true if the person has trained the skill at any level.
    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.contains_key(&skill)
    }

    /// Train a skill to the given level, creating the instance if needed.
    /// Any existing bonus is kept.
    pub fn set_skill_level(&mut self, skill: SkillId, level: i32) -> &SkillInstance {
        let instance = self
            .skills
            .entry(skill)
            .or_insert_with(|| SkillInstance::new(skill, level));
        instance.set_level(level);
        instance
    }

    /// Forget a skill entirely. Returns the removed instance.
    pub fn remove_skill(&mut self, skill: SkillId) -> Option<SkillInstance> {
        self.skills.remove(&skill)
    }

    /// Spend one Edge point. Returns false if none were left.
    pub fn spend_edge(&mut self) -> bool {
        if self.edge == 0 {
            return false;
        }
        self.edge -= 1;
        true
    }
}

fn deserialize_skills<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<SkillId, SkillInstance>, D::Error> {
    let skills = BTreeMap::<SkillId, SkillInstance>::deserialize(deserializer)?;
    if let Some((key, instance)) = skills.iter().find(|(key, i)| **key != i.skill) {
        return Err(D::Error::custom(format!(
            "skill entry {key} holds an instance of {}",
            instance.skill
        )));
    }
    Ok(skills)
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_respects_birthday() {
        let person = Person::new("Natasha Kerensky", date(3000, 6, 15));
        assert_eq!(person.age_at(date(3030, 6, 14)), 29);
        assert_eq!(person.age_at(date(3030, 6, 15)), 30);
        assert_eq!(person.age_at(date(3031, 1, 1)), 30);
    }

    #[test]
    fn age_before_birth_is_zero() {
        let person = Person::new("Unborn", date(3050, 1, 1));
        assert_eq!(person.age_at(date(3049, 12, 31)), 0);
    }

    #[test]
    fn skills_default_untrained() {
        let person = Person::new("Recruit", date(3030, 1, 1));
        assert!(!person.has_skill(SkillId::GunneryMek));
        assert!(person.skill(SkillId::GunneryMek).is_none());
    }

    #[test]
    fn set_skill_level_keeps_bonus() {
        let mut person = Person::new("Tech", date(3010, 1, 1)).with_skill(SkillId::TechMek, 2);
        if let Some(skill) = person.skill_mut(SkillId::TechMek) {
            skill.bonus = 1;
        }
        let skill = person.set_skill_level(SkillId::TechMek, 4);
        assert_eq!(skill.level(), 4);
        assert_eq!(skill.bonus, 1);
    }

    #[test]
    fn remove_skill() {
        let mut person = Person::new("Tech", date(3010, 1, 1)).with_skill(SkillId::TechMek, 2);
        let removed = person.remove_skill(SkillId::TechMek);
        assert_eq!(removed.map(|s| s.level()), Some(2));
        assert!(!person.has_skill(SkillId::TechMek));
    }

    #[test]
    fn spend_edge_stops_at_zero() {
        let mut person = Person::new("Lucky", date(3010, 1, 1)).with_edge(1);
        assert!(person.spend_edge());
        assert!(!person.spend_edge());
        assert_eq!(person.edge, 0);
    }

    #[test]
    fn serde_round_trip_keeps_skills_by_name() {
        let person = Person::new("Kai Allard-Liao", date(3030, 3, 3))
            .with_attributes(AttributeSet::new().with(Attribute::Reflexes, 9))
            .with_skill(SkillId::PilotingMek, 6)
            .with_edge(3);
        let json = serde_json::to_string(&person).unwrap();
        assert!(json.contains("\"Piloting/Mek\""));
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, person.id);
        assert_eq!(back.attributes.get(Attribute::Reflexes), 9);
        assert_eq!(back.skill(SkillId::PilotingMek).map(|s| s.level()), Some(6));
        assert_eq!(back.edge, 3);
    }

    #[test]
    fn deserialize_rejects_mismatched_skill_entry() {
        let person = Person::new("Forger", date(3030, 3, 3)).with_skill(SkillId::Tactics, 2);
        let json = serde_json::to_string(&person)
            .unwrap()
            .replace("{\"Tactics\":", "{\"Leadership\":");
        let err = serde_json::from_str::<Person>(&json).unwrap_err();
        assert!(err.to_string().contains("skill entry Leadership"));
    }
}
