//! Core data types for the stable matching engine
//!
//! ## Types
//!
//! - [`Participants`]: the two labeled [`Side`]s supplied to a run
//! - [`Member`]: one participant and its [`PreferenceList`]
//! - [`ProposingSide`]: which input side makes the offers
//! - [`Pair`]: one couple, oriented (proposer, receiver)
//! - [`StableMatching`]: the composed result
//! - [`MatchReceipt`]: run counters plus a digest of the result

mod participant;
mod pair;
mod receipt;

pub use participant::{Member, Participant, Participants, PreferenceList, ProposingSide, Side};
pub use pair::{Pair, StableMatching};
pub use receipt::MatchReceipt;
