//! Color slots of a style state

use synth_core::Color;

/// Which color of a region is being asked for
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorType {
    Foreground,
    Background,
    TextForeground,
    TextBackground,
    Focus,
}

impl ColorType {
    pub const COUNT: usize = 5;

    pub const ALL: [ColorType; ColorType::COUNT] = [
        ColorType::Foreground,
        ColorType::Background,
        ColorType::TextForeground,
        ColorType::TextBackground,
        ColorType::Focus,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorType::Foreground => "Foreground",
            ColorType::Background => "Background",
            ColorType::TextForeground => "TextForeground",
            ColorType::TextBackground => "TextBackground",
            ColorType::Focus => "Focus",
        }
    }

    /// Whether the widget's own background applies to this slot
    pub fn is_background(self) -> bool {
        matches!(self, ColorType::Background | ColorType::TextBackground)
    }

    /// Whether the widget's own foreground applies to this slot
    pub fn is_foreground(self) -> bool {
        matches!(self, ColorType::Foreground | ColorType::TextForeground)
    }
}

/// One optional color per [`ColorType`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorSlots([Option<Color>; ColorType::COUNT]);

impl ColorSlots {
    pub fn get(&self, ty: ColorType) -> Option<Color> {
        self.0[ty.index()]
    }

    pub fn set(&mut self, ty: ColorType, color: Color) {
        self.0[ty.index()] = Some(color);
    }

    pub fn clear(&mut self, ty: ColorType) {
        self.0[ty.index()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Slots set in `other` replace the ones here
    pub fn overlay(&self, other: &ColorSlots) -> ColorSlots {
        let mut merged = *self;
        for (slot, color) in merged.0.iter_mut().zip(other.0.iter()) {
            if color.is_some() {
                *slot = *color;
            }
        }
        merged
    }
}
