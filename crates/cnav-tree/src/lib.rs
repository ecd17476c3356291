// ABOUTME: Composite component tree for windows, panels, and leaf widgets.
// ABOUTME: Uniform display and parent/child/sibling navigation across all kinds.

mod component;
mod kind;
mod render;

pub use component::{Component, TreeError};
pub use kind::{Kind, Role};
