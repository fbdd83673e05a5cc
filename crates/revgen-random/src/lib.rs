//! revgen Random Sources
//!
//! The one capability pattern generation needs from the outside world:
//! bounded random integers on demand.
//!
//! # Overview
//!
//! - [`RandomSource`]: Capability trait passed by `&mut` into every generation call
//! - [`SeededRandom`]: Seeded PRNG for reproducible end-to-end runs
//! - [`ScriptedRandom`]: Deterministic test double returning a scripted sequence
//! - [`draw`]: Checked draw used by scopes, never trusts the source blindly
//! - [`draw_index`]: Checked draw of an index into a collection
//!
//! # Example
//!
//! ```rust
//! use revgen_random::{draw, RandomSource, ScriptedRandom, SeededRandom};
//!
//! let mut seeded = SeededRandom::new(7);
//! let value = draw(&mut seeded, 1, 6).unwrap();
//! assert!((1..=6).contains(&value));
//!
//! let mut scripted = ScriptedRandom::new([3, 0]);
//! assert_eq!(scripted.generate(0, 5).unwrap(), 3);
//! assert_eq!(scripted.generate(0, 5).unwrap(), 0);
//! ```

#![warn(missing_docs)]

mod error;
mod scripted;
mod seeded;
mod source;

// Re-exports
pub use error::RandomSourceError;
pub use scripted::{ScriptedCall, ScriptedRandom};
pub use seeded::SeededRandom;
pub use source::{draw, draw_index, RandomSource};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for random sources
    pub use crate::{draw, draw_index, RandomSource, RandomSourceError, ScriptedRandom, SeededRandom};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
