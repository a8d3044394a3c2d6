//! Engine - Component registry and parallel arrays.
//!
//! Components are indices into columnar arrays rather than objects. The
//! registry hands out indices, tracks parent/child structure through a
//! creation-time context stack, and generates per-instance base identifiers.

pub mod arrays;
pub mod registry;

pub use registry::{
    allocate_index, get_allocated_count, get_allocated_indices, get_current_parent_index, get_id,
    get_index, is_allocated, next_base_id, on_destroy, pop_parent_context, push_parent_context,
    release_children, release_index, reset_registry,
};
