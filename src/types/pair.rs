//! Matched couples and the final stable matching.
//!
//! Every pair is oriented (proposing member, receiving member), so a couple
//! can never show up twice under opposite orientations.

use serde::{Deserialize, Serialize};

use crate::types::Participant;

/// One couple of the final matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Member of the proposing side
    pub proposer: Participant,

    /// Member of the receiving side
    pub receiver: Participant,
}

impl Pair {
    /// Create a new pair
    pub fn new(proposer: impl Into<Participant>, receiver: impl Into<Participant>) -> Self {
        Self {
            proposer: proposer.into(),
            receiver: receiver.into(),
        }
    }

    /// Does this pair contain `id` on either side?
    pub fn involves(&self, id: &str) -> bool {
        self.proposer == id || self.receiver == id
    }

    /// The other member of the couple, if `id` is one of them
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        if self.proposer == id {
            Some(self.receiver.as_str())
        } else if self.receiver == id {
            Some(self.proposer.as_str())
        } else {
            None
        }
    }

    /// Borrow both identifiers as a tuple
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.proposer, &self.receiver)
    }
}

impl<P: Into<Participant>, R: Into<Participant>> From<(P, R)> for Pair {
    fn from((proposer, receiver): (P, R)) -> Self {
        Self::new(proposer, receiver)
    }
}

/// The result of a run: one oriented pair per couple, sorted by proposer.
///
/// ## Example
///
/// ```
/// use stable_matching::types::{Pair, StableMatching};
///
/// let matching = StableMatching::new("A", "B", vec![Pair::new("x", "y")]);
///
/// assert_eq!(matching.len(), 1);
/// assert_eq!(matching.partner_of("y"), Some("x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StableMatching {
    /// Label of the side that proposed
    pub proposing: String,

    /// Label of the side that received proposals
    pub receiving: String,

    /// Couples, ordered by proposer identifier
    pub pairs: Vec<Pair>,
}

impl StableMatching {
    /// Create a matching from already-composed pairs
    pub fn new(
        proposing: impl Into<String>,
        receiving: impl Into<String>,
        pairs: Vec<Pair>,
    ) -> Self {
        Self {
            proposing: proposing.into(),
            receiving: receiving.into(),
            pairs,
        }
    }

    /// Number of couples
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is nobody matched?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the couples
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Current partner of `id`, looking at both sides
    ///
    /// Ambiguous when a proposer and a receiver share an identifier; the
    /// first couple mentioning `id` wins. Use [`receiver_of`] or
    /// [`proposer_of`] when the side is known.
    ///
    /// [`receiver_of`]: Self::receiver_of
    /// [`proposer_of`]: Self::proposer_of
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        self.pairs.iter().find_map(|pair| pair.partner_of(id))
    }

    /// Receiver matched to `proposer`
    pub fn receiver_of(&self, proposer: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.proposer == proposer)
            .map(|pair| pair.receiver.as_str())
    }

    /// Proposer matched to `receiver`
    pub fn proposer_of(&self, receiver: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.receiver == receiver)
            .map(|pair| pair.proposer.as_str())
    }

    /// Is `id` part of some couple?
    pub fn is_matched(&self, id: &str) -> bool {
        self.pairs.iter().any(|pair| pair.involves(id))
    }

    /// Does the matching contain the couple regardless of orientation?
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs
            .iter()
            .any(|pair| pair.as_tuple() == (a, b) || pair.as_tuple() == (b, a))
    }

    /// Borrow the couples as tuples
    pub fn to_tuples(&self) -> Vec<(&str, &str)> {
        self.pairs.iter().map(Pair::as_tuple).collect()
    }
}

impl IntoIterator for StableMatching {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a StableMatching {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
