//! Blocking-pair audit of a finished matching.
//!
//! A pair (p, r) blocks a matching when p and r are not matched to each
//! other, p prefers r to its current partner and r prefers p to its current
//! partner. Being unmatched counts as worse than any ranked partner.

use std::collections::HashMap;

use crate::types::{Member, Pair, Participants, Side, StableMatching};

/// Every blocking pair of `matching`, oriented (proposer, receiver)
///
/// The proposing side is looked up by the label recorded in the matching,
/// falling back to the first input side.
pub fn blocking_pairs(participants: &Participants, matching: &StableMatching) -> Vec<Pair> {
    let (proposers, receivers) = orient(participants, matching);

    // One map per side: a proposer and a receiver may share an identifier
    let receiver_of: HashMap<&str, &str> = matching
        .iter()
        .map(|pair| (pair.proposer.as_str(), pair.receiver.as_str()))
        .collect();
    let proposer_of: HashMap<&str, &str> = matching
        .iter()
        .map(|pair| (pair.receiver.as_str(), pair.proposer.as_str()))
        .collect();

    let mut blocking = Vec::new();
    for proposer in &proposers.members {
        let current = receiver_of.get(proposer.id.as_str()).copied();

        for target in &proposer.preferences {
            if Some(target.as_str()) == current {
                // Everything further down is worse than the current partner
                break;
            }
            let Some(receiver) = receivers.member(target) else {
                continue;
            };
            if prefers_over_current(receiver, &proposer.id, proposer_of.get(target.as_str()).copied()) {
                blocking.push(Pair::new(proposer.id.as_str(), target.as_str()));
            }
        }
    }

    blocking
}

/// Does `matching` have no blocking pair?
pub fn is_stable(participants: &Participants, matching: &StableMatching) -> bool {
    blocking_pairs(participants, matching).is_empty()
}

fn orient<'a>(participants: &'a Participants, matching: &StableMatching) -> (&'a Side, &'a Side) {
    participants
        .side(&matching.proposing)
        .zip(participants.other_side(&matching.proposing))
        .unwrap_or((&participants.first, &participants.second))
}

fn prefers_over_current(member: &Member, candidate: &str, current: Option<&str>) -> bool {
    match current {
        None => member.rank_of(candidate).is_some(),
        Some(current) => member.prefers(candidate, current) == Some(true),
    }
}
