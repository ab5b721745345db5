//! Core types for colors, geometry, layouts, and transitions.

pub mod color;
pub mod easing;
pub mod geometry;
pub mod layout;
pub mod transition;

pub use color::{Color, ColorParseError};
pub use easing::{DEFAULT_EASING, EasingRegistry};
pub use geometry::{Axis, Scalar, ScalarOffset, Spacing, Unit};
pub use layout::{DockLayout, GridLayout, HorizontalLayout, Layout, LayoutRegistry, VerticalLayout};
pub use transition::Transition;
