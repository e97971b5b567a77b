//! Validator → proposal engine → result composer.

use tracing::info;

use crate::config::MatchingSettings;
use crate::engine::{composer, proposal, validator};
use crate::error::Result;
use crate::roster::Roster;
use crate::types::{MatchReceipt, Participants, ProposingSide, StableMatching};

/// Result of a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The composed stable matching
    pub matching: StableMatching,

    /// Counters and digest of the run
    pub receipt: MatchReceipt,
}

/// Stable matching engine.
///
/// Holds the run options only; every run starts from fresh state, so a
/// matcher can be reused for any number of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableMatcher {
    settings: MatchingSettings,
}

impl StableMatcher {
    /// Create a matcher with explicit settings
    pub fn new(settings: MatchingSettings) -> Self {
        Self { settings }
    }

    /// Create a matcher where the given side proposes
    pub fn proposing(proposing: ProposingSide) -> Self {
        Self::new(MatchingSettings { proposing })
    }

    /// Settings in use
    pub fn settings(&self) -> &MatchingSettings {
        &self.settings
    }

    /// Run deferred acceptance on `participants`
    ///
    /// # Errors
    ///
    /// Fails before any proposal when the input is rejected by
    /// [`validator::check`]; no partial matching is produced.
    pub fn run(&self, participants: &Participants) -> Result<MatchResult> {
        validator::check(participants)?;

        let roster = Roster::build(participants, self.settings.proposing);
        let run = proposal::run(&roster);
        let matching = composer::compose(&roster, &run.engagements);

        let receipt = MatchReceipt::for_matching(
            &matching,
            run.proposals,
            run.rounds,
            run.engagements.free_proposers() as u64,
            run.engagements.free_receivers() as u64,
        );

        info!(
            proposing = %matching.proposing,
            receiving = %matching.receiving,
            pairs = receipt.pairs,
            proposals = receipt.proposals,
            rounds = receipt.rounds,
            "matching complete"
        );

        Ok(MatchResult { matching, receipt })
    }

    /// Run and keep only the matching
    pub fn stable_matching(&self, participants: &Participants) -> Result<StableMatching> {
        self.run(participants).map(|result| result.matching)
    }
}

/// Compute the stable matching with the first side proposing
///
/// # Example
///
/// ```
/// use stable_matching::stable_matching;
/// use stable_matching::types::{Participants, Side};
///
/// let participants = Participants::new(
///     Side::new("A").with_member("x", ["y"]),
///     Side::new("B").with_member("y", ["x"]),
/// );
///
/// let matching = stable_matching(&participants).unwrap();
/// assert_eq!(matching.to_tuples(), vec![("x", "y")]);
/// ```
pub fn stable_matching(participants: &Participants) -> Result<StableMatching> {
    StableMatcher::default().stable_matching(participants)
}
