//! Prelude module for common imports.
//!
//! ```
//! use rowdiff::prelude::*;
//! ```

// Algorithms
pub use crate::algo::{
    generate_section_updates, generate_updates, generate_updates_with_config, section_transition,
    DiffConfig, DiffResult, DiffStats, SectionChange, SectionUpdate, StableHasher,
};

// Edits
pub use crate::edit::{Edit, Move};

// Error
pub use crate::error::{ReplayError, ReplayResult};

// Identity
pub use crate::id::{HasIdentity, Keyed, StableId};

// Model
pub use crate::model::ListModel;

// Coordinates
pub use crate::position::{Position, Positions, SectionSet};

// Replay
pub use crate::replay::{apply_collection_updates, apply_table_updates, CellUpdateHandler, ListWidget};
