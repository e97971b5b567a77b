//! Turns the final engagement table into the output matching.
//!
//! Couples come out oriented (proposer, receiver) and sorted by proposer
//! identifier, so each couple appears exactly once and the order is stable.

use crate::engine::proposal::Engagements;
use crate::roster::Roster;
use crate::types::{Pair, StableMatching};

/// Compose the final matching from the engagement table
pub fn compose(roster: &Roster, engagements: &Engagements) -> StableMatching {
    let mut pairs: Vec<Pair> = engagements
        .couples()
        .filter_map(|(p, r)| {
            let proposer = roster.proposers.name(p)?;
            let receiver = roster.receivers.name(r)?;
            Some(Pair::new(proposer, receiver))
        })
        .collect();

    pairs.sort();

    StableMatching::new(
        roster.proposers.label(),
        roster.receivers.label(),
        pairs,
    )
}
