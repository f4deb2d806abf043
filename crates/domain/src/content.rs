//! Content pack - the immutable tables injected into the state machine
//!
//! The pack is validated once, when it is built (or deserialized). After that
//! every lookup the state machine and presentation queries need is total:
//! each role has exactly one profile, both sides have an advocate, and the
//! question bank is non-empty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{Advocate, IntroCard, Question, RoleBadge, RoleProfile, Ruling, Witness};
use crate::error::DomainError;
use crate::value_objects::Role;

/// The loose tables as supplied by a content source.
///
/// This is also the JSON shape of a content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTables {
    pub intro: IntroCard,
    pub roles: Vec<RoleProfile>,
    pub advocates: Vec<Advocate>,
    #[serde(default)]
    pub witnesses: Vec<Witness>,
    pub questions: Vec<Question>,
    pub ruling: Ruling,
}

/// Validated, read-only content for one presentation.
///
/// # Invariants
///
/// - At least one question; question ids are unique
/// - Exactly one profile per `Role`
/// - Exactly one advocate for each side, none for the Judge
/// - Every witness testifies for one of the two sides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentTables", into = "ContentTables")]
pub struct ContentPack {
    intro: IntroCard,
    roles: RoleTable,
    prosecution: Advocate,
    defense: Advocate,
    witnesses: Vec<Witness>,
    questions: Vec<Question>,
    ruling: Ruling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RoleTable {
    prosecution: RoleProfile,
    defense: RoleProfile,
    judge: RoleProfile,
}

impl RoleTable {
    fn get(&self, role: Role) -> &RoleProfile {
        match role {
            Role::Prosecution => &self.prosecution,
            Role::Defense => &self.defense,
            Role::Judge => &self.judge,
        }
    }
}

impl ContentPack {
    /// Validate loose tables into a pack.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when any invariant listed on the type
    /// is broken.
    pub fn new(tables: ContentTables) -> Result<Self, DomainError> {
        let ContentTables {
            intro,
            roles,
            advocates,
            witnesses,
            questions,
            ruling,
        } = tables;

        if questions.is_empty() {
            return Err(DomainError::validation("Question bank is empty"));
        }
        let mut seen_ids = HashSet::new();
        for question in &questions {
            if !seen_ids.insert(question.id()) {
                return Err(DomainError::validation(format!(
                    "Duplicate question id {}",
                    question.id()
                )));
            }
        }

        let profile_role = |p: &RoleProfile| p.role;
        let roles = RoleTable {
            prosecution: take_one(&roles, Role::Prosecution, profile_role, "role profile")?,
            defense: take_one(&roles, Role::Defense, profile_role, "role profile")?,
            judge: take_one(&roles, Role::Judge, profile_role, "role profile")?,
        };

        if let Some(advocate) = advocates.iter().find(|a| !a.side.is_side()) {
            return Err(DomainError::validation(format!(
                "Advocate '{}' must argue for the prosecution or the defense",
                advocate.name
            )));
        }
        let advocate_side = |a: &Advocate| a.side;
        let prosecution = take_one(&advocates, Role::Prosecution, advocate_side, "advocate")?;
        let defense = take_one(&advocates, Role::Defense, advocate_side, "advocate")?;

        if let Some(witness) = witnesses.iter().find(|w| !w.side.is_side()) {
            return Err(DomainError::validation(format!(
                "Witness '{}' must testify for the prosecution or the defense",
                witness.id
            )));
        }

        Ok(Self {
            intro,
            roles,
            prosecution,
            defense,
            witnesses,
            questions,
            ruling,
        })
    }

    #[inline]
    pub fn intro(&self) -> &IntroCard {
        &self.intro
    }

    /// Profile for `role`.
    #[inline]
    pub fn profile(&self, role: Role) -> &RoleProfile {
        self.roles.get(role)
    }

    /// All profiles, in character-select order.
    pub fn profiles(&self) -> impl Iterator<Item = &RoleProfile> {
        Role::ALL.into_iter().map(|role| self.roles.get(role))
    }

    /// Profile to display for a possibly unset role (unset shows the Judge).
    pub fn display_profile(&self, role: Option<Role>) -> &RoleProfile {
        self.profile(Role::or_default_display(role))
    }

    /// The "You are: ..." badge for a possibly unset role.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let badge = pack.badge(None);
    /// assert_eq!(badge.role, Role::Judge);
    /// ```
    pub fn badge(&self, role: Option<Role>) -> RoleBadge {
        self.display_profile(role).badge()
    }

    /// Advocate arguing for `side`; `None` for the Judge.
    pub fn advocate(&self, side: Role) -> Option<&Advocate> {
        match side {
            Role::Prosecution => Some(&self.prosecution),
            Role::Defense => Some(&self.defense),
            Role::Judge => None,
        }
    }

    #[inline]
    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[inline]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[inline]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[inline]
    pub fn ruling(&self) -> &Ruling {
        &self.ruling
    }
}

fn take_one<T: Clone>(
    items: &[T],
    role: Role,
    role_of: impl Fn(&T) -> Role,
    what: &str,
) -> Result<T, DomainError> {
    let mut matching = items.iter().filter(|item| role_of(*item) == role);
    match (matching.next(), matching.next()) {
        (Some(item), None) => Ok(item.clone()),
        (None, _) => Err(DomainError::validation(format!(
            "Missing {} for {}",
            what, role
        ))),
        (Some(_), Some(_)) => Err(DomainError::validation(format!(
            "More than one {} for {}",
            what, role
        ))),
    }
}

impl TryFrom<ContentTables> for ContentPack {
    type Error = DomainError;

    fn try_from(tables: ContentTables) -> Result<Self, Self::Error> {
        ContentPack::new(tables)
    }
}

impl From<ContentPack> for ContentTables {
    fn from(pack: ContentPack) -> Self {
        let RoleTable {
            prosecution,
            defense,
            judge,
        } = pack.roles;
        Self {
            intro: pack.intro,
            roles: vec![prosecution, defense, judge],
            advocates: vec![pack.prosecution, pack.defense],
            witnesses: pack.witnesses,
            questions: pack.questions,
            ruling: pack.ruling,
        }
    }
}

// ============================================================================
// Test fixtures
// ============================================================================

/// Small four-question pack used by unit tests across the crate.
///
/// Correct answers are `[1, 2, 3, 2]`, like the friction trial bank.
#[cfg(test)]
pub(crate) fn test_pack() -> ContentPack {
    ContentPack::new(test_tables()).unwrap()
}

#[cfg(test)]
pub(crate) fn test_tables() -> ContentTables {
    fn profile(role: Role, label: &str, icon: &str) -> RoleProfile {
        RoleProfile {
            role,
            label: label.to_string(),
            icon: icon.to_string(),
            tagline: format!("{} tagline", label),
            description: String::new(),
            mission: String::new(),
            quote: String::new(),
            facts: vec![],
            highlight: None,
        }
    }

    fn advocate(side: Role, name: &str) -> Advocate {
        Advocate {
            side,
            name: name.to_string(),
            stance: String::new(),
            icon: String::new(),
            arguments: vec![format!("{} argument", name)],
        }
    }

    let questions = [1usize, 2, 3, 2]
        .into_iter()
        .enumerate()
        .map(|(i, correct)| {
            Question::new(
                i as u32 + 1,
                format!("Question {}", i + 1),
                vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct,
                format!("Explanation {}", i + 1),
            )
            .unwrap()
        })
        .collect();

    ContentTables {
        intro: IntroCard {
            title: "Trial".to_string(),
            summary: "Summary".to_string(),
        },
        roles: vec![
            profile(Role::Prosecution, "Prosecution", "Flame"),
            profile(Role::Defense, "Defense", "ShieldCheck"),
            profile(Role::Judge, "Judge", "Scale"),
        ],
        advocates: vec![
            advocate(Role::Prosecution, "Prosecution"),
            advocate(Role::Defense, "Defense"),
        ],
        witnesses: vec![Witness {
            id: "bearing".to_string(),
            name: "Bearing".to_string(),
            icon: "CircleDot".to_string(),
            testimony: "I roll.".to_string(),
            side: Role::Prosecution,
        }],
        questions,
        ruling: Ruling {
            headline: "Ambivalent".to_string(),
            summary: String::new(),
            harmful_effects: vec![],
            useful_effects: vec![],
            conclusion: String::new(),
        },
    }
}
