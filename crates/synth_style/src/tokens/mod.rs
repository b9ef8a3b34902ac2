//! Keys for the values a style carries
//!
//! - Colors are addressed by [`ColorType`]
//! - Everything else goes through the typed property map: a closed set of
//!   [`WellKnownKey`]s plus custom string keys

mod color;
mod property;

pub use color::*;
pub use property::*;
