//! # Stable Matching
//!
//! Deferred-acceptance (Gale–Shapley) matching between two disjoint groups
//! of participants that each rank every member of the opposite group.
//!
//! ## Architecture
//!
//! - **Types**: Participants, preference lists, pairs, receipts
//! - **Roster**: Slab-interned, rank-indexed view of both sides
//! - **Engine**: Validator → proposal engine → result composer
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical input produces an identical pair sequence
//! 2. **No Partial Results**: Invalid input fails before the first proposal
//! 3. **Proposer-Optimal**: The first side proposes unless configured otherwise
//! 4. **Synchronous Execution**: A run is a pure function of its input
//!
//! ## Example
//!
//! ```
//! use stable_matching::{stable_matching, Participants, Side};
//!
//! let participants = Participants::new(
//!     Side::new("side_A")
//!         .with_member("abc", ["123", "451", "912"])
//!         .with_member("asd", ["123", "912", "451"])
//!         .with_member("pqq", ["123", "451", "912"]),
//!     Side::new("side_B")
//!         .with_member("123", ["pqq", "asd", "abc"])
//!         .with_member("451", ["asd", "pqq", "abc"])
//!         .with_member("912", ["pqq", "asd", "abc"]),
//! );
//!
//! let matching = stable_matching(&participants).unwrap();
//! assert_eq!(
//!     matching.to_tuples(),
//!     vec![("abc", "451"), ("asd", "912"), ("pqq", "123")]
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participants, Pair, StableMatching, MatchReceipt
pub mod types;

/// Indexed participant storage
pub mod roster;

/// Matching engine: validation, proposals, composition
pub mod engine;

/// Input errors
pub mod error;

/// Layered settings
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{
    MatchReceipt, Member, Pair, Participant, Participants, PreferenceList, ProposingSide, Side,
    StableMatching,
};
pub use engine::{blocking_pairs, is_stable, stable_matching, validate, MatchResult, StableMatcher};
pub use error::{MatchingError, Result};
pub use config::{MatchingSettings, Settings};
