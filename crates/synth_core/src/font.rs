//! Font descriptors
//!
//! Fonts are descriptions only; metrics and shaping belong to the text stack.

use std::fmt;
use std::sync::Arc;

bitflags::bitflags! {
    /// Font style bits
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        const BOLD   = 0b0000_0001;
        const ITALIC = 0b0000_0010;
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl FontStyle {
    /// Neither bold nor italic
    pub const PLAIN: FontStyle = FontStyle::empty();
}

/// A font request: family name, point size and style
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
    style: FontStyle,
}

impl Font {
    pub fn new(family: impl Into<Arc<str>>, size: f32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
        }
    }

    /// Plain font of the given family and size
    pub fn plain(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self::new(family, size, FontStyle::PLAIN)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn is_bold(&self) -> bool {
        self.style.contains(FontStyle::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }

    /// Same family and style at a different size
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            size,
            style: self.style,
        }
    }

    /// Same family and size with a different style
    pub fn with_style(&self, style: FontStyle) -> Self {
        Self {
            family: self.family.clone(),
            size: self.size,
            style,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)?;
        if self.is_bold() {
            f.write_str(" bold")?;
        }
        if self.is_italic() {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_keeps_family() {
        let base = Font::plain("Serif", 12.0);
        let bold = base.with_style(FontStyle::BOLD).with_size(14.0);
        assert_eq!(bold.family(), "Serif");
        assert!(bold.is_bold());
        assert!(!bold.is_italic());
        assert_eq!(bold.to_string(), "Serif 14 bold");
    }
}
