//! State - Focus, input and roving focus groups.
//!
//! Interaction state shared by all components: the focused-index signal,
//! keyboard and mouse handler registries, roving focus groups, and the
//! crossterm event bridge.

pub mod focus;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod roving;
