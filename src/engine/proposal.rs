//! Deferred-acceptance proposal loop.
//!
//! ## Sweeps
//!
//! The loop runs in discrete sweeps. At the start of a sweep the set of
//! proposers that are free and still have someone left to propose to is
//! computed once, in input order. Each of them then makes exactly one
//! proposal to its best not-yet-proposed target:
//!
//! - target free: the two become engaged
//! - target prefers the proposer to its incumbent: the incumbent is freed
//! - otherwise: the proposal is rejected
//!
//! A proposer freed during a sweep waits for the next one. The loop stops
//! when a sweep would be empty; at most `proposers × receivers` proposals
//! are ever made.
//!
//! ## State
//!
//! - [`ProposalHistory`]: one cursor per proposer; everything before the
//!   cursor has been proposed to, so history only grows
//! - [`Engagements`]: symmetric partner table, updated in one step

use tracing::{debug, trace};

use crate::roster::{Key, Roster};

// ============================================================================
// Proposal history
// ============================================================================

/// Per-proposer cursor into its preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalHistory {
    cursors: Vec<usize>,
}

impl ProposalHistory {
    /// Empty history for `proposers` proposers
    pub fn new(proposers: usize) -> Self {
        Self {
            cursors: vec![0; proposers],
        }
    }

    /// Number of proposals `proposer` has made
    #[inline]
    pub fn count(&self, proposer: Key) -> usize {
        self.cursors.get(proposer).copied().unwrap_or(0)
    }

    /// Targets `proposer` has already proposed to, in proposal order
    pub fn proposed<'r>(&self, roster: &'r Roster, proposer: Key) -> &'r [Key] {
        let preferences = roster.proposers.preferences(proposer);
        &preferences[..self.count(proposer).min(preferences.len())]
    }

    /// Best target `proposer` has not proposed to yet
    #[inline]
    pub fn next_target(&self, roster: &Roster, proposer: Key) -> Option<Key> {
        roster
            .proposers
            .preferences(proposer)
            .get(self.count(proposer))
            .copied()
    }

    /// Record a proposal, advancing the cursor by one
    #[inline]
    pub fn record(&mut self, proposer: Key) {
        if let Some(cursor) = self.cursors.get_mut(proposer) {
            *cursor += 1;
        }
    }

    /// Total proposals across all proposers
    pub fn total(&self) -> usize {
        self.cursors.iter().sum()
    }
}

// ============================================================================
// Engagements
// ============================================================================

/// Symmetric partner table.
///
/// `proposer_partner[p] == Some(r)` if and only if
/// `receiver_partner[r] == Some(p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engagements {
    proposer_partner: Vec<Option<Key>>,
    receiver_partner: Vec<Option<Key>>,
}

impl Engagements {
    /// Everybody free
    pub fn new(proposers: usize, receivers: usize) -> Self {
        Self {
            proposer_partner: vec![None; proposers],
            receiver_partner: vec![None; receivers],
        }
    }

    /// Engage `proposer` and `receiver`, returning the receiver's former partner
    ///
    /// Any previous edge touching either of them is removed first.
    pub fn engage(&mut self, proposer: Key, receiver: Key) -> Option<Key> {
        let incumbent = self.receiver_partner[receiver].take();
        if let Some(old) = incumbent {
            self.proposer_partner[old] = None;
        }
        if let Some(previous) = self.proposer_partner[proposer].take() {
            self.receiver_partner[previous] = None;
        }

        self.proposer_partner[proposer] = Some(receiver);
        self.receiver_partner[receiver] = Some(proposer);
        incumbent
    }

    /// Current partner of a proposer
    #[inline]
    pub fn receiver_of(&self, proposer: Key) -> Option<Key> {
        self.proposer_partner.get(proposer).copied().flatten()
    }

    /// Current partner of a receiver
    #[inline]
    pub fn proposer_of(&self, receiver: Key) -> Option<Key> {
        self.receiver_partner.get(receiver).copied().flatten()
    }

    /// Is the proposer unengaged?
    #[inline]
    pub fn is_proposer_free(&self, proposer: Key) -> bool {
        self.receiver_of(proposer).is_none()
    }

    /// Couples as (proposer, receiver), in proposer key order
    pub fn couples(&self) -> impl Iterator<Item = (Key, Key)> + '_ {
        self.proposer_partner
            .iter()
            .enumerate()
            .filter_map(|(p, r)| r.map(|r| (p, r)))
    }

    /// Number of couples
    pub fn len(&self) -> usize {
        self.couples().count()
    }

    /// No couples at all?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Proposers without a partner
    pub fn free_proposers(&self) -> usize {
        self.proposer_partner.iter().filter(|r| r.is_none()).count()
    }

    /// Receivers without a partner
    pub fn free_receivers(&self) -> usize {
        self.receiver_partner.iter().filter(|p| p.is_none()).count()
    }

    /// Do both directions agree?
    pub fn is_symmetric(&self) -> bool {
        self.couples()
            .all(|(p, r)| self.proposer_of(r) == Some(p))
            && self
                .receiver_partner
                .iter()
                .enumerate()
                .filter_map(|(r, p)| p.map(|p| (p, r)))
                .all(|(p, r)| self.receiver_of(p) == Some(r))
    }
}

// ============================================================================
// Engine
// ============================================================================

/// What happened to a single proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalOutcome {
    /// The target was free and accepted
    Engaged,
    /// The target dropped its incumbent for the proposer
    Replaced { incumbent: Key },
    /// The target kept its incumbent
    Rejected { incumbent: Key },
}

/// Final state of the proposal loop.
#[derive(Debug, Clone)]
pub struct ProposalRun {
    /// Final couples
    pub engagements: Engagements,

    /// Every proposal made
    pub history: ProposalHistory,

    /// Number of proposal events
    pub proposals: u64,

    /// Number of sweeps
    pub rounds: u64,
}

/// Runs deferred acceptance over an indexed roster.
#[derive(Debug)]
pub struct ProposalEngine<'a> {
    roster: &'a Roster,
    history: ProposalHistory,
    engagements: Engagements,
    proposals: u64,
    rounds: u64,
}

impl<'a> ProposalEngine<'a> {
    /// Everybody free, no proposals yet
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            history: ProposalHistory::new(roster.proposers.len()),
            engagements: Engagements::new(roster.proposers.len(), roster.receivers.len()),
            proposals: 0,
            rounds: 0,
        }
    }

    /// Proposers that are free and still have a target left, in input order
    pub fn free_proposers(&self) -> Vec<Key> {
        self.roster
            .proposers
            .keys()
            .filter(|&p| self.engagements.is_proposer_free(p))
            .filter(|&p| self.history.next_target(self.roster, p).is_some())
            .collect()
    }

    /// Run one sweep, returning how many proposals it made
    pub fn sweep(&mut self) -> usize {
        let free = self.free_proposers();
        if free.is_empty() {
            return 0;
        }

        self.rounds += 1;
        trace!(round = self.rounds, free = free.len(), "sweep");

        free.into_iter()
            .filter_map(|proposer| self.propose(proposer))
            .count()
    }

    /// Make `proposer`'s next proposal
    ///
    /// Returns the target and outcome, or None when the list is exhausted.
    pub fn propose(&mut self, proposer: Key) -> Option<(Key, ProposalOutcome)> {
        let target = self.history.next_target(self.roster, proposer)?;
        self.history.record(proposer);
        self.proposals += 1;

        let outcome = match self.engagements.proposer_of(target) {
            None => {
                self.engagements.engage(proposer, target);
                ProposalOutcome::Engaged
            }
            Some(incumbent) if self.roster.receivers.prefers(target, proposer, incumbent) => {
                self.engagements.engage(proposer, target);
                ProposalOutcome::Replaced { incumbent }
            }
            Some(incumbent) => ProposalOutcome::Rejected { incumbent },
        };

        debug!(
            proposer = self.roster.proposers.name(proposer).unwrap_or_default(),
            target = self.roster.receivers.name(target).unwrap_or_default(),
            ?outcome,
            "proposal"
        );

        Some((target, outcome))
    }

    /// Sweep until no proposer is both free and has a target left
    pub fn run(mut self) -> ProposalRun {
        while self.sweep() > 0 {}

        ProposalRun {
            engagements: self.engagements,
            history: self.history,
            proposals: self.proposals,
            rounds: self.rounds,
        }
    }
}

/// Run deferred acceptance to a fixed point
pub fn run(roster: &Roster) -> ProposalRun {
    ProposalEngine::new(roster).run()
}

// ============================================================================
// Unit Tests
// ============================================================================
