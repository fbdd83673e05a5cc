//! revgen Core
//!
//! Configured, reproducible string generation over scope trees.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig ─┐
//!                  ├─> Generator ──> Scope tree ──> RandomSource
//! root Scope ──────┘        │
//!                           └─> String (committed only on success)
//! ```
//!
//! # Example
//!
//! ```rust
//! use revgen_core::prelude::*;
//!
//! let pattern = SequenceScope::new("version")
//!     .with(LiteralScope::new("v").with_literal("v"))
//!     .with(
//!         LiteralScope::new("major")
//!             .with_literals(["1", "2", "3"]),
//!     );
//!
//! let generator = Generator::with_config(pattern, GeneratorConfig::new().with_samples(3));
//! let batch = generator.samples().unwrap();
//! assert_eq!(batch.len(), 3);
//! assert!(batch.iter().all(|s| s.starts_with('v') && s.len() == 2));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;

// Re-exports
pub use config::GeneratorConfig;
pub use error::{ConfigError, GeneratorError};
pub use generator::Generator;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and running generators
    pub use crate::{ConfigError, Generator, GeneratorConfig, GeneratorError};
    pub use revgen_random::{RandomSource, RandomSourceError, ScriptedRandom, SeededRandom};
    pub use revgen_scope::{
        ChoiceScope, ConfigurationError, GenerateError, LiteralScope, Repetition, Scope, SequenceScope,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
