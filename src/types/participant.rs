//! Participants and their preference lists.
//!
//! ## Shape
//!
//! A run takes exactly two [`Side`]s. Each side carries a label and an
//! ordered list of [`Member`]s; each member ranks every member of the
//! opposite side, best first.
//!
//! Member order is significant: the proposal engine visits free proposers
//! in input order, so the same input always yields the same matching.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier.
pub type Participant = String;

/// Opposite-side participants, strictly ordered by descending preference.
pub type PreferenceList = Vec<Participant>;

// ============================================================================
// Member
// ============================================================================

/// One participant together with its ranking of the opposite side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Participant identifier, unique within its side
    pub id: Participant,

    /// Ranking of the opposite side, most preferred first
    pub preferences: PreferenceList,
}

impl Member {
    /// Create a member from an identifier and its ranking
    pub fn new<I, S>(id: impl Into<Participant>, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Participant>,
    {
        Self {
            id: id.into(),
            preferences: preferences.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `other` in this member's ranking (0 = most preferred)
    ///
    /// The first occurrence wins if the list repeats an entry.
    pub fn rank_of(&self, other: &str) -> Option<usize> {
        self.preferences.iter().position(|p| p == other)
    }

    /// Is `a` preferred over `b`?
    ///
    /// Returns `None` when neither appears in the ranking.
    pub fn prefers(&self, a: &str, b: &str) -> Option<bool> {
        self.preferences
            .iter()
            .find(|p| p.as_str() == a || p.as_str() == b)
            .map(|p| p == a)
    }
}

// ============================================================================
// Side
// ============================================================================

/// One of the two labeled groups of participants.
///
/// ## Example
///
/// ```
/// use stable_matching::types::Side;
///
/// let side = Side::new("side_A")
///     .with_member("abc", ["123", "451"])
///     .with_member("asd", ["451", "123"]);
///
/// assert_eq!(side.len(), 2);
/// assert_eq!(side.member("asd").unwrap().preferences[0], "451");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    /// Side label, distinct from the other side's label
    pub label: String,

    /// Members in input order
    pub members: Vec<Member>,
}

impl Side {
    /// Create an empty side
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
        }
    }

    /// Add a member or replace the ranking of an existing one
    ///
    /// Keeps the position of a replaced member, like an insertion-ordered map.
    pub fn insert(&mut self, member: Member) {
        match self.members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => existing.preferences = member.preferences,
            None => self.members.push(member),
        }
    }

    /// Builder form of [`Side::insert`]
    pub fn with_member<I, S>(mut self, id: impl Into<Participant>, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Participant>,
    {
        self.insert(Member::new(id, preferences));
        self
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Does the side have no members?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by identifier
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Is `id` a member of this side?
    pub fn contains(&self, id: &str) -> bool {
        self.member(id).is_some()
    }

    /// Member identifiers in input order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }
}

// ============================================================================
// Participants
// ============================================================================

/// Which input side makes the offers.
///
/// The proposing side receives its optimal stable matching, so the choice
/// changes the outcome whenever more than one stable matching exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposingSide {
    /// The first side supplied proposes
    #[default]
    First,
    /// The second side supplied proposes
    Second,
}

impl ProposingSide {
    /// Returns the other choice
    pub fn opposite(self) -> Self {
        match self {
            ProposingSide::First => ProposingSide::Second,
            ProposingSide::Second => ProposingSide::First,
        }
    }
}

/// The complete input of a matching run: two labeled sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    /// First side supplied
    pub first: Side,

    /// Second side supplied
    pub second: Side,
}

impl Participants {
    /// Pair up two sides
    pub fn new(first: Side, second: Side) -> Self {
        Self { first, second }
    }

    /// Both sides in input order
    pub fn sides(&self) -> [&Side; 2] {
        [&self.first, &self.second]
    }

    /// The proposing side followed by the receiving side
    pub fn oriented(&self, proposing: ProposingSide) -> (&Side, &Side) {
        match proposing {
            ProposingSide::First => (&self.first, &self.second),
            ProposingSide::Second => (&self.second, &self.first),
        }
    }

    /// The side opposite to the one labeled `label`
    pub fn other_side(&self, label: &str) -> Option<&Side> {
        if self.first.label == label {
            Some(&self.second)
        } else if self.second.label == label {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Look up a side by label
    pub fn side(&self, label: &str) -> Option<&Side> {
        self.sides().into_iter().find(|s| s.label == label)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
