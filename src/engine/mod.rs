//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Validate First**: Rejected input never reaches the proposal loop
//! 3. **Synchronous Execution**: One pass, no suspension, no shared state
//! 4. **Proposer-Optimal**: The proposing side gets its best stable partner
//!
//! ## Stages
//!
//! - [`validator`]: completeness and shape checks
//! - [`proposal`]: deferred-acceptance sweeps to a fixed point
//! - [`composer`]: engagement table → oriented, sorted pairs
//! - [`stability`]: blocking-pair audit of any matching
//!
//! ## Example
//!
//! ```
//! use stable_matching::engine::StableMatcher;
//! use stable_matching::types::{Participants, Side};
//!
//! let participants = Participants::new(
//!     Side::new("side_A")
//!         .with_member("abc", ["123", "451"])
//!         .with_member("asd", ["123", "451"]),
//!     Side::new("side_B")
//!         .with_member("123", ["asd", "abc"])
//!         .with_member("451", ["asd", "abc"]),
//! );
//!
//! let result = StableMatcher::default().run(&participants).unwrap();
//!
//! assert_eq!(result.matching.partner_of("asd"), Some("123"));
//! assert_eq!(result.matching.partner_of("abc"), Some("451"));
//! ```

pub mod composer;
pub mod matcher;
pub mod proposal;
pub mod stability;
pub mod validator;

pub use matcher::{stable_matching, MatchResult, StableMatcher};
pub use proposal::{Engagements, ProposalEngine, ProposalHistory, ProposalOutcome, ProposalRun};
pub use stability::{blocking_pairs, is_stable};
pub use validator::{check, validate};
