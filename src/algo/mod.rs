//! Algorithm implementations for list diffing.
//!
//! - `diff`: row diff producing edit operations
//! - `section`: section insert/delete policy
//! - `batch`: independent per-section diffs
//! - `hash`: stable hashing utilities

mod batch;
mod diff;
mod hash;
mod section;

pub use batch::{generate_section_updates, SectionUpdate};
pub use diff::{
    generate_updates, generate_updates_with_config, DiffConfig, DiffResult, DiffStats,
};
pub use hash::StableHasher;
pub use section::{section_transition, SectionChange};
