use std::cmp::Ordering;
use std::str::FromStr;

use crate::auth::application::domain::entities::UserId;
use crate::config::{ConfigError, ConfigSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatch {
    CaseSensitive,
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub skill_match: SkillMatch,
}

impl DirectoryConfig {
    pub fn from_source(source: &ConfigSource) -> Result<Self, ConfigError> {
        let case_sensitive = source.parse_or("SKILL_MATCH_CASE_SENSITIVE", true)?;

        Ok(Self {
            skill_match: if case_sensitive {
                SkillMatch::CaseSensitive
            } else {
                SkillMatch::CaseInsensitive
            },
        })
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            skill_match: SkillMatch::CaseSensitive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorSummary {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
}

impl MentorSummary {
    fn has_skill(&self, wanted: &str, mode: SkillMatch) -> bool {
        self.skills.iter().any(|s| match mode {
            SkillMatch::CaseSensitive => s == wanted,
            SkillMatch::CaseInsensitive => s.to_lowercase() == wanted.to_lowercase(),
        })
    }

    fn primary_skill(&self) -> Option<&str> {
        self.skills.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentorOrder {
    ByName,
    BySkill,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("orderBy must be one of: name, skill")]
pub struct UnknownOrder;

impl FromStr for MentorOrder {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(MentorOrder::ByName),
            "skill" => Ok(MentorOrder::BySkill),
            _ => Err(UnknownOrder),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorFilter {
    pub skill: Option<String>,
    pub order: Option<MentorOrder>,
}

/// Applies the skill filter and ordering to mentors given in storage order.
/// Sorting is stable; mentors without skills go last under `BySkill`.
pub fn select_mentors(
    mentors: Vec<MentorSummary>,
    filter: &MentorFilter,
    mode: SkillMatch,
) -> Vec<MentorSummary> {
    let wanted = filter
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut selected: Vec<MentorSummary> = match wanted {
        Some(skill) => mentors
            .into_iter()
            .filter(|m| m.has_skill(skill, mode))
            .collect(),
        None => mentors,
    };

    match filter.order {
        Some(MentorOrder::ByName) => selected.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(MentorOrder::BySkill) => {
            selected.sort_by(|a, b| match (a.primary_skill(), b.primary_skill()) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
        }
        None => {}
    }

    selected
}
