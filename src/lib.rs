//! rowdiff - Identity-aware row diffing for incremental list views
//!
//! ## Core Concepts
//!
//! **Two-tier equality**: every element is compared twice. Content equality
//! (`Eq + Hash`) decides whether a row changed at all; identity
//! ([`HasIdentity`]) decides whether a changed row is the same entity, which
//! turns a delete + insert pair into a `Move` or an in-place `Reload`.
//!
//! **Pure diff, separate replay**: the diff returns immutable [`Edit`]s. A
//! replay adapter applies them to a widget inside one atomic batch.
//!
//! ## Modules
//! - `algo`: diff, section policy, batch helper, stable hashing
//! - `edit`: edit operations
//! - `id`: identity trait and key helpers
//! - `position`: row/section coordinates
//! - `replay`: widget trait and replay adapters
//! - `model`: in-memory widget
//!
//! ## Usage
//!
//! ```
//! use rowdiff::{generate_updates, Edit, HasIdentity, Position};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Todo {
//!     id: u64,
//!     title: String,
//!     done: bool,
//! }
//!
//! impl HasIdentity for Todo {
//!     type Id = u64;
//!
//!     fn identity(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let old = vec![
//!     Todo { id: 1, title: "write".into(), done: false },
//!     Todo { id: 2, title: "test".into(), done: false },
//! ];
//! let mut new = old.clone();
//! new[1].done = true;
//!
//! let edits = generate_updates(&new, &old, 0);
//! assert_eq!(edits, vec![Edit::Reload(Position::new(1, 0))]);
//! ```

/// Algorithms: diff, section policy, hashing
pub mod algo;

/// Edit operations
pub mod edit;

/// Error types
pub mod error;

/// Element identity
pub mod id;

/// In-memory list widget
pub mod model;

/// Row and section coordinates
pub mod position;

/// Prelude for common imports
pub mod prelude;

/// Replay adapters
pub mod replay;

// =============================================================================
// Re-exports
// =============================================================================

// Algorithms
pub use algo::{
    generate_section_updates, generate_updates, generate_updates_with_config, DiffConfig,
    DiffResult, DiffStats, SectionUpdate, StableHasher,
};

// Edits
pub use edit::{Edit, Move};

// Error types
pub use error::{ReplayError, ReplayResult};

// Identity
pub use id::{HasIdentity, Keyed, StableId};

// Model
pub use model::ListModel;

// Coordinates
pub use position::{Position, Positions, SectionSet};

// Replay
pub use replay::{apply_collection_updates, apply_table_updates, CellUpdateHandler, ListWidget};

// =============================================================================
// Tests
// =============================================================================
