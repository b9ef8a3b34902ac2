//! Synth Core Primitives
//!
//! This crate provides the value types shared by the Synth style engine and
//! the widget delegates that consume it:
//!
//! - **Geometry**: `Color`, `Insets`, `Rect`
//! - **Fonts**: `Font` descriptors (family, size, style bits)
//! - **Component state**: the `ComponentState` bitmask and its derivations
//! - **Widgets**: the `StyledWidget` trait the engine reads names and colors from
//!
//! # Example
//!
//! ```rust
//! use synth_core::{ButtonModel, ComponentState};
//!
//! let model = ButtonModel {
//!     rollover: true,
//!     focused: true,
//!     ..ButtonModel::default()
//! };
//!
//! let state = ComponentState::for_button(&model);
//! assert!(state.contains(ComponentState::MOUSE_OVER | ComponentState::FOCUSED));
//! ```

pub mod font;
pub mod geometry;
pub mod state;
pub mod widget;

pub use font::{Font, FontStyle};
pub use geometry::{Color, Insets, Rect};
pub use state::{ButtonModel, ComponentState};
pub use widget::{StyledWidget, WidgetId};
