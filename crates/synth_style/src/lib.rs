//! Synth Style Engine
//!
//! Rule-based styling for widget delegates: rules associate name or region
//! patterns with style payloads, and the engine merges every payload that
//! applies to a widget into one cached style.
//!
//! # Overview
//!
//! - **Regions**: built-in and application-defined styleable areas, looked up
//!   through a per-session [`RegionRegistry`]
//! - **Rules**: [`StyleRule`]s matching the widget name or the region name
//! - **Styles**: mergeable [`SynthStyle`] payloads with per-state entries,
//!   colors, fonts, painters and typed properties
//! - **Resolution**: [`StyleEngine`] merges matching payloads, later rules
//!   winning, and caches the result per set of matched payloads
//! - **Contexts**: [`SynthContext`] applies widget-versus-style precedence for
//!   colors, fonts, properties and painters
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use synth_core::{Color, ComponentState, Font};
//! use synth_style::{ColorType, MatchKind, Region, StateInfo, StyleEngine, SynthSession, SynthStyle};
//!
//! let session = SynthSession::new();
//! let engine = StyleEngine::new(session.clone());
//!
//! engine.register(
//!     Some("button"),
//!     Arc::new(SynthStyle::new().font(Font::plain("Serif", 13.0))),
//!     MatchKind::Region,
//! )?;
//! engine.register(
//!     Some("cancel"),
//!     Arc::new(SynthStyle::new().state(
//!         StateInfo::new(ComponentState::ENABLED).color(ColorType::Foreground, Color::RED),
//!     )),
//!     MatchKind::Name,
//! )?;
//!
//! let region = session.regions().region_for("ButtonUI").unwrap();
//! assert_eq!(region, Region::BUTTON);
//!
//! let style = engine.resolve_named("cancel", &region);
//! assert_eq!(style.font_for_state(ComponentState::ENABLED).map(Font::size), Some(13.0));
//! # Ok::<(), synth_style::StyleError>(())
//! ```
//!
//! # Sessions
//!
//! Nothing is process-global. A [`SynthSession`] owns the region table and
//! the selected-UI scope; every engine is built on one.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod painter;
pub mod region;
pub mod rule;
pub mod session;
pub mod style;
pub mod tokens;

pub use config::{FontConfig, SynthConfig};
pub use context::SynthContext;
pub use engine::{StyleEngine, StyleFactory};
pub use error::{ConfigError, Result, StyleError};
pub use painter::{
    AggregatePainter, Orientation, PaintMethod, PaintRequest, PainterHandle, PainterInfo, SynthPainter,
};
pub use region::{BuiltinRegion, CustomRegion, Region, RegionRegistry};
pub use rule::{MatchKind, StyleRule};
pub use session::{SelectedUiGuard, SynthSession};
pub use style::{StateInfo, SynthStyle};
pub use tokens::{ColorSlots, ColorType, Icon, PropertyKey, PropertyMap, PropertyValue, WellKnownKey};
