//! revgen Scope System
//!
//! Composable generation scopes: the inverse of pattern matching. A scope
//! tree describes a pattern; generating from it manufactures a string that
//! matches.
//!
//! # Core Concepts
//!
//! - [`Scope`]: Capability trait, "append content to a buffer given a random source"
//! - [`LiteralScope`]: Leaf holding an ordered pool of literal alternatives
//! - [`SequenceScope`]: Children emitted in order
//! - [`ChoiceScope`]: One child drawn per repetition
//! - [`Repetition`]: Inclusive `[min, max]` bound shared by every scope
//!
//! # Example
//!
//! ```rust
//! use revgen_random::SeededRandom;
//! use revgen_scope::{LiteralScope, Scope, SequenceScope};
//!
//! let pattern = SequenceScope::new("id")
//!     .with(LiteralScope::new("prefix").with_literal("ID-"))
//!     .with(
//!         LiteralScope::new("digits")
//!             .with_literals(["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"])
//!             .with_occurrences(3, 5),
//!     );
//!
//! let mut out = String::new();
//! pattern.generate(&mut out, &mut SeededRandom::new(42)).unwrap();
//! assert!(out.starts_with("ID-"));
//! assert!((6..=8).contains(&out.len()));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod choice;
mod error;
mod literal;
mod repetition;
mod scope;
mod sequence;

// Re-exports
pub use choice::ChoiceScope;
pub use error::{ConfigurationError, GenerateError};
pub use literal::LiteralScope;
pub use repetition::Repetition;
pub use scope::Scope;
pub use sequence::SequenceScope;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
