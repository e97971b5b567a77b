//! Roster module: the engine's indexed view of the participants.
//!
//! ## Architecture
//!
//! - **Interner**: slab-backed identifier ↔ dense key mapping per side
//! - **SideRoster**: rankings as key lists plus inverted rank tables
//! - **Roster**: both sides, oriented proposing → receiving
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build | O(n·m) |
//! | Key / name lookup | O(1) |
//! | Preference comparison | O(1) |

pub mod interner;
pub mod side;

pub use interner::{Interner, Key};
pub use side::{Roster, SideRoster, UNRANKED};
