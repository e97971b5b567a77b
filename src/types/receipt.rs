//! Match receipt summarizing one run.
//!
//! The receipt carries the run's counters plus a SHA-256 digest of the
//! composed matching, so two runs can be compared without comparing pairs.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

/// Receipt summarizing a completed matching run.
///
/// ## Digest
///
/// The 32-byte digest is a SHA-256 hash over the side labels and every
/// pair in output order, each string prefixed with its little-endian `u64`
/// length. Identical input yields an identical digest.
///
/// ## Example
///
/// ```
/// use stable_matching::types::{MatchReceipt, Pair, StableMatching};
///
/// let matching = StableMatching::new("A", "B", vec![Pair::new("x", "y")]);
/// let receipt = MatchReceipt::for_matching(&matching, 1, 1, 0, 0);
///
/// assert_eq!(receipt.pairs, 1);
/// assert_eq!(receipt.digest, MatchReceipt::digest_of(&matching));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of proposal events
    pub proposals: u64,

    /// Number of sweeps over the free proposers
    pub rounds: u64,

    /// Number of couples in the matching
    pub pairs: u64,

    /// Proposers left without a partner
    pub unmatched_proposers: u64,

    /// Receivers left without a partner
    pub unmatched_receivers: u64,

    /// SHA-256 of the canonical pair sequence (32 bytes)
    pub digest: [u8; 32],
}

impl MatchReceipt {
    /// Create a receipt with an explicit digest
    pub fn new(
        proposals: u64,
        rounds: u64,
        pairs: u64,
        unmatched_proposers: u64,
        unmatched_receivers: u64,
        digest: [u8; 32],
    ) -> Self {
        Self {
            proposals,
            rounds,
            pairs,
            unmatched_proposers,
            unmatched_receivers,
            digest,
        }
    }

    /// Create a receipt for a composed matching, computing its digest
    pub fn for_matching(
        matching: &crate::types::StableMatching,
        proposals: u64,
        rounds: u64,
        unmatched_proposers: u64,
        unmatched_receivers: u64,
    ) -> Self {
        Self::new(
            proposals,
            rounds,
            matching.len() as u64,
            unmatched_proposers,
            unmatched_receivers,
            Self::digest_of(matching),
        )
    }

    /// Compute the SHA-256 digest of a matching
    pub fn digest_of(matching: &crate::types::StableMatching) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hash_str(&mut hasher, &matching.proposing);
        hash_str(&mut hasher, &matching.receiving);
        for pair in matching.iter() {
            hash_str(&mut hasher, &pair.proposer);
            hash_str(&mut hasher, &pair.receiver);
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Did every participant on both sides end up matched?
    pub fn is_perfect(&self) -> bool {
        self.unmatched_proposers == 0 && self.unmatched_receivers == 0
    }

    /// Average proposals per couple
    ///
    /// Returns None if nobody was matched.
    pub fn proposals_per_pair(&self) -> Option<f64> {
        if self.pairs == 0 {
            None
        } else {
            Some(self.proposals as f64 / self.pairs as f64)
        }
    }
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

// ============================================================================
// Unit Tests
// ============================================================================
