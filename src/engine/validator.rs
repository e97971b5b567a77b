//! Input validation, run before any proposal.
//!
//! ## Rules
//!
//! 1. The two side labels differ
//! 2. No identifier appears twice on the same side
//! 3. Every member ranks every member of the opposite side (completeness)
//! 4. Every ranked identifier belongs to the opposite side
//!
//! Sides are visited in input order, members in input order, and the first
//! violation is reported. Repeated entries inside one ranking are tolerated;
//! only presence is checked.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{MatchingError, Result};
use crate::types::{Participants, Side};

/// Does every member of each side rank every member of the other side?
///
/// Presence only: neither duplicates nor unknown entries make this false.
///
/// # Example
///
/// ```
/// use stable_matching::engine::validate;
/// use stable_matching::types::{Participants, Side};
///
/// let complete = Participants::new(
///     Side::new("A").with_member("x", ["y"]),
///     Side::new("B").with_member("y", ["x"]),
/// );
/// assert!(validate(&complete));
///
/// let incomplete = Participants::new(
///     Side::new("A").with_member("x", Vec::<String>::new()),
///     Side::new("B").with_member("y", ["x"]),
/// );
/// assert!(!validate(&incomplete));
/// ```
pub fn validate(participants: &Participants) -> bool {
    let [first, second] = participants.sides();
    first_missing(first, second).is_none() && first_missing(second, first).is_none()
}

/// Full input gate used by the engine
///
/// # Errors
///
/// Returns the first violation found, see the module docs for the order.
pub fn check(participants: &Participants) -> Result<()> {
    let [first, second] = participants.sides();

    if first.label == second.label {
        warn!(label = %first.label, "rejected input: duplicate side label");
        return Err(MatchingError::DuplicateSideLabel {
            label: first.label.clone(),
        });
    }

    for side in [first, second] {
        check_unique(side)?;
    }

    for (side, opposite) in [(first, second), (second, first)] {
        check_rankings(side, opposite)?;
    }

    Ok(())
}

fn check_unique(side: &Side) -> Result<()> {
    let mut seen = HashSet::with_capacity(side.len());
    for id in side.ids() {
        if !seen.insert(id) {
            warn!(side = %side.label, participant = %id, "rejected input: duplicate participant");
            return Err(MatchingError::DuplicateParticipant {
                side: side.label.clone(),
                participant: id.to_owned(),
            });
        }
    }
    Ok(())
}

fn check_rankings(side: &Side, opposite: &Side) -> Result<()> {
    let opposite_ids: HashSet<&str> = opposite.ids().collect();

    for member in &side.members {
        let ranked: HashSet<&str> = member.preferences.iter().map(String::as_str).collect();

        if let Some(missing) = opposite.ids().find(|id| !ranked.contains(id)) {
            warn!(
                side = %side.label,
                participant = %member.id,
                missing = %missing,
                "rejected input: incomplete preferences"
            );
            return Err(MatchingError::MissingPreferences {
                side: side.label.clone(),
                participant: member.id.clone(),
                missing: missing.to_owned(),
            });
        }

        if let Some(unknown) = member
            .preferences
            .iter()
            .find(|p| !opposite_ids.contains(p.as_str()))
        {
            warn!(
                side = %side.label,
                participant = %member.id,
                unknown = %unknown,
                "rejected input: unknown participant"
            );
            return Err(MatchingError::UnknownParticipant {
                side: side.label.clone(),
                participant: member.id.clone(),
                unknown: unknown.clone(),
            });
        }
    }

    Ok(())
}

/// First (member, missing) pair of `side` against `opposite`, if any
fn first_missing<'a>(side: &'a Side, opposite: &'a Side) -> Option<(&'a str, &'a str)> {
    side.members.iter().find_map(|member| {
        opposite
            .ids()
            .find(|id| !member.preferences.iter().any(|p| p == id))
            .map(|missing| (member.id.as_str(), missing))
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
