//! Indexed view of the two sides for one run.
//!
//! ## Design
//!
//! Each [`SideRoster`] stores its members' rankings as dense keys into the
//! opposite side, plus an inverted rank table so that "does `r` prefer `a`
//! over `b`" is two array reads instead of a list scan.
//!
//! ```text
//! preferences[member] = [k0, k1, k2]      (best first)
//! ranks[member][k1]   = 1
//! ```
//!
//! Rosters are built once from validated input and never mutated.

use crate::roster::{Interner, Key};
use crate::types::{Participants, ProposingSide, Side};

/// Rank given to an opposite-side key that a member never listed
pub const UNRANKED: usize = usize::MAX;

/// One side of a run with interned identifiers and rank tables.
#[derive(Debug, Clone)]
pub struct SideRoster {
    /// Side label as supplied
    label: String,

    /// Member identifiers, key = input position
    names: Interner,

    /// Ranking of each member, as keys of the opposite side
    preferences: Vec<Vec<Key>>,

    /// `ranks[member][other]` = position of `other` in the member's ranking
    ranks: Vec<Vec<usize>>,
}

impl SideRoster {
    /// Index `side`, resolving its rankings against `opposite`
    ///
    /// Entries that do not resolve are skipped; the validator rejects such
    /// input before a roster is ever built. The first occurrence of a
    /// repeated entry fixes its rank.
    fn build(side: &Side, names: Interner, opposite: &Interner) -> Self {
        let mut preferences = vec![Vec::new(); names.len()];
        let mut ranks = vec![Vec::new(); names.len()];

        for member in &side.members {
            let Some(key) = names.key(&member.id) else {
                continue;
            };

            let mut rank = vec![UNRANKED; opposite.len()];
            let mut list = Vec::with_capacity(member.preferences.len());
            for other in member.preferences.iter().filter_map(|p| opposite.key(p)) {
                if rank[other] == UNRANKED {
                    rank[other] = list.len();
                    list.push(other);
                }
            }

            preferences[key] = list;
            ranks[key] = rank;
        }

        Self {
            label: side.label.clone(),
            names,
            preferences,
            ranks,
        }
    }

    /// Side label
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Does the side have no members?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Member keys in input order
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.names.keys()
    }

    /// Identifier of a member
    #[inline]
    pub fn name(&self, key: Key) -> Option<&str> {
        self.names.name(key)
    }

    /// Key of a member identifier
    #[inline]
    pub fn key(&self, name: &str) -> Option<Key> {
        self.names.key(name)
    }

    /// A member's ranking of the opposite side, best first
    pub fn preferences(&self, key: Key) -> &[Key] {
        self.preferences.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of `other` in the ranking of `member`, [`UNRANKED`] if absent
    #[inline]
    pub fn rank(&self, member: Key, other: Key) -> usize {
        self.ranks
            .get(member)
            .and_then(|ranks| ranks.get(other))
            .copied()
            .unwrap_or(UNRANKED)
    }

    /// Does `member` strictly prefer `a` over `b`?
    #[inline]
    pub fn prefers(&self, member: Key, a: Key, b: Key) -> bool {
        self.rank(member, a) < self.rank(member, b)
    }
}

/// Both sides of a run, oriented proposing → receiving.
#[derive(Debug, Clone)]
pub struct Roster {
    /// The side making offers
    pub proposers: SideRoster,

    /// The side answering offers
    pub receivers: SideRoster,
}

impl Roster {
    /// Index validated participants for a run
    ///
    /// # Example
    ///
    /// ```
    /// use stable_matching::roster::Roster;
    /// use stable_matching::types::{Participants, ProposingSide, Side};
    ///
    /// let participants = Participants::new(
    ///     Side::new("A").with_member("x", ["y"]),
    ///     Side::new("B").with_member("y", ["x"]),
    /// );
    /// let roster = Roster::build(&participants, ProposingSide::First);
    ///
    /// assert_eq!(roster.proposers.label(), "A");
    /// assert_eq!(roster.receivers.preferences(0), &[0]);
    /// ```
    pub fn build(participants: &Participants, proposing: ProposingSide) -> Self {
        let (proposing_side, receiving_side) = participants.oriented(proposing);

        let proposer_names = intern_side(proposing_side);
        let receiver_names = intern_side(receiving_side);

        let proposers = SideRoster::build(proposing_side, proposer_names.clone(), &receiver_names);
        let receivers = SideRoster::build(receiving_side, receiver_names, &proposer_names);

        Self { proposers, receivers }
    }
}

fn intern_side(side: &Side) -> Interner {
    let mut names = Interner::with_capacity(side.len());
    for id in side.ids() {
        names.intern(id);
    }
    names
}

// ============================================================================
// Unit Tests
// ============================================================================
