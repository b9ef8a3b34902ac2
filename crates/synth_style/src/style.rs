//! Style payloads
//!
//! A [`SynthStyle`] is the bag of visual properties attached to a rule and
//! produced by resolution. Every property is optional: when two styles are
//! composed, only the properties the more specific style sets take over, the
//! rest are inherited from the base.
//!
//! Styles are shared as `Arc<SynthStyle>` and treated as immutable once they
//! are registered or resolved. Code that wants to adjust a resolved style goes
//! through [`Arc::make_mut`], which copies it first.
//!
//! # Example
//!
//! ```rust
//! use synth_core::{Color, ComponentState, Font};
//! use synth_style::{ColorType, StateInfo, SynthStyle};
//!
//! let base = SynthStyle::new()
//!     .font(Font::plain("Serif", 12.0))
//!     .state(StateInfo::new(ComponentState::ENABLED).color(ColorType::Foreground, Color::BLACK));
//!
//! let ok = SynthStyle::new()
//!     .state(StateInfo::new(ComponentState::ENABLED).color(ColorType::Foreground, Color::RED));
//!
//! let merged = base.compose(&ok);
//! assert_eq!(merged.font, Some(Font::plain("Serif", 12.0)));
//! assert_eq!(
//!     merged.color_for_state(ComponentState::ENABLED, ColorType::Foreground),
//!     Some(Color::RED)
//! );
//! ```

use synth_core::{Color, ComponentState, Font, Insets};

use crate::painter::{best_painter, merge_painters, Orientation, PaintMethod, PainterHandle, PainterInfo};
use crate::tokens::{ColorSlots, ColorType, PropertyKey, PropertyMap, PropertyValue};

/// Properties that apply while a widget is in a given state
///
/// A state of `ComponentState::empty()` is the wildcard: it applies when no
/// more specific state matches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateInfo {
    pub state: ComponentState,
    pub font: Option<Font>,
    pub colors: ColorSlots,
    pub painters: Vec<PainterInfo>,
    pub properties: PropertyMap,
}

impl StateInfo {
    pub fn new(state: ComponentState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn color(mut self, ty: ColorType, color: Color) -> Self {
        self.colors.set(ty, color);
        self
    }

    /// Add a painter, replacing any painter for the same method and orientation
    pub fn painter(mut self, info: PainterInfo) -> Self {
        self.painters = merge_painters(&self.painters, std::slice::from_ref(&info));
        self
    }

    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn get_color(&self, ty: ColorType) -> Option<Color> {
        self.colors.get(ty)
    }

    pub fn get_property(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// `over` on top of `self`; the state mask of `self` is kept
    pub fn compose(&self, over: &StateInfo) -> StateInfo {
        let mut properties = self.properties.clone();
        properties.extend(over.properties.iter().map(|(k, v)| (k.clone(), v.clone())));

        StateInfo {
            state: self.state,
            font: over.font.clone().or_else(|| self.font.clone()),
            colors: self.colors.overlay(&over.colors),
            painters: merge_painters(&self.painters, &over.painters),
            properties,
        }
    }
}

/// A mergeable style payload
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SynthStyle {
    pub font: Option<Font>,
    pub insets: Option<Insets>,
    pub opaque: Option<bool>,
    /// Painters that apply in every state
    pub painters: Vec<PainterInfo>,
    /// Per-state properties, at most one entry per state mask
    pub states: Vec<StateInfo>,
    pub properties: PropertyMap,
}

impl SynthStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn insets(mut self, insets: Insets) -> Self {
        self.insets = Some(insets);
        self
    }

    pub fn opaque(mut self, opaque: bool) -> Self {
        self.opaque = Some(opaque);
        self
    }

    /// Add a painter, replacing any painter for the same method and orientation
    pub fn painter(mut self, info: PainterInfo) -> Self {
        self.painters = merge_painters(&self.painters, std::slice::from_ref(&info));
        self
    }

    /// Add per-state properties; an existing entry for the same mask absorbs them
    pub fn state(mut self, info: StateInfo) -> Self {
        self.add_state(&info);
        self
    }

    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn set_property(&mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    fn add_state(&mut self, info: &StateInfo) {
        match self.states.iter_mut().find(|s| s.state == info.state) {
            Some(existing) => *existing = existing.compose(info),
            None => self.states.push(info.clone()),
        }
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Compose a more specific style on top of this one
    ///
    /// Properties set in `over` win; unset ones fall back to `self`. Neither
    /// input is modified. States with the same mask are merged, other states
    /// are appended after the base's.
    pub fn compose(&self, over: &SynthStyle) -> SynthStyle {
        let mut merged = SynthStyle {
            font: over.font.clone().or_else(|| self.font.clone()),
            insets: over.insets.or(self.insets),
            opaque: over.opaque.or(self.opaque),
            painters: merge_painters(&self.painters, &over.painters),
            states: self.states.clone(),
            properties: self.properties.clone(),
        };

        for info in &over.states {
            merged.add_state(info);
        }
        merged
            .properties
            .extend(over.properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.insets.is_none()
            && self.opaque.is_none()
            && self.painters.is_empty()
            && self.states.is_empty()
            && self.properties.is_empty()
    }

    // =========================================================================
    // State lookups
    // =========================================================================

    /// The state entry that best describes `state`
    ///
    /// Among entries whose mask is a subset of `state`, the one with the most
    /// bits wins (the later one on ties, so an exact match always wins).
    /// Failing that, the latest wildcard entry. Asking for the empty state
    /// returns only a wildcard entry.
    pub fn state_info(&self, state: ComponentState) -> Option<&StateInfo> {
        if state.is_empty() {
            return self.states.iter().rev().find(|info| info.state.is_empty());
        }

        let mut best: Option<&StateInfo> = None;
        let mut best_count = 0;
        let mut wildcard: Option<&StateInfo> = None;

        for info in self.states.iter().rev() {
            if info.state.is_empty() {
                wildcard = wildcard.or(Some(info));
            } else if state.contains(info.state) {
                let count = info.state.bit_count();
                if count > best_count {
                    best = Some(info);
                    best_count = count;
                }
            }
        }

        best.or(wildcard)
    }

    /// Walk the best state entry, then the wildcard entry, for a value
    fn find_in_states<'a, T>(
        &'a self,
        state: ComponentState,
        lookup: impl Fn(&'a StateInfo) -> Option<T>,
    ) -> Option<T> {
        let info = self.state_info(state);
        if let Some(found) = info.and_then(&lookup) {
            return Some(found);
        }
        if info.map_or(true, |info| !info.state.is_empty()) {
            return self.state_info(ComponentState::empty()).and_then(lookup);
        }
        None
    }

    /// Color defined for `state`, falling back to the wildcard state
    pub fn color_for_state(&self, state: ComponentState, ty: ColorType) -> Option<Color> {
        self.find_in_states(state, |info| info.get_color(ty))
    }

    /// Font defined for `state`, then the wildcard state, then the style font
    pub fn font_for_state(&self, state: ComponentState) -> Option<&Font> {
        self.find_in_states(state, |info| info.font.as_ref())
            .or(self.font.as_ref())
    }

    /// Property for `state`, then the wildcard state, then the style itself
    pub fn get(&self, state: ComponentState, key: &PropertyKey) -> Option<&PropertyValue> {
        self.find_in_states(state, |info| info.properties.get(key))
            .or_else(|| self.properties.get(key))
    }

    /// Best painter for `state`: the state entry's painters first, then the
    /// style-wide ones
    pub fn painter_for(
        &self,
        state: ComponentState,
        method: &PaintMethod,
        orientation: Option<Orientation>,
    ) -> Option<&PainterHandle> {
        self.state_info(state)
            .and_then(|info| best_painter(&info.painters, method, orientation))
            .or_else(|| best_painter(&self.painters, method, orientation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::WellKnownKey;

    fn enabled() -> ComponentState {
        ComponentState::ENABLED
    }

    #[test]
    fn test_compose_inherits_unset() {
        let base = SynthStyle::new()
            .font(Font::plain("Serif", 12.0))
            .insets(Insets::uniform(2.0))
            .state(StateInfo::new(enabled()).color(ColorType::Foreground, Color::RED));
        let over = SynthStyle::new()
            .opaque(true)
            .state(StateInfo::new(enabled()).color(ColorType::Foreground, Color::BLUE));

        let merged = base.compose(&over);
        assert_eq!(merged.font, base.font);
        assert_eq!(merged.insets, Some(Insets::uniform(2.0)));
        assert_eq!(merged.opaque, Some(true));
        assert_eq!(merged.states.len(), 1);
        assert_eq!(
            merged.color_for_state(enabled(), ColorType::Foreground),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn test_compose_leaves_inputs_untouched() {
        let base = SynthStyle::new().property(WellKnownKey::TreeRowHeight, 16i64);
        let over = SynthStyle::new().property(WellKnownKey::TreeRowHeight, 20i64);
        let base_before = base.clone();
        let over_before = over.clone();

        let merged = base.compose(&over);
        assert_eq!(
            merged.get(enabled(), &WellKnownKey::TreeRowHeight.into()),
            Some(&PropertyValue::Int(20))
        );
        assert_eq!(base, base_before);
        assert_eq!(over, over_before);
    }

    #[test]
    fn test_state_builder_merges_same_mask() {
        let style = SynthStyle::new()
            .state(StateInfo::new(enabled()).color(ColorType::Foreground, Color::RED))
            .state(StateInfo::new(enabled()).color(ColorType::Background, Color::WHITE));
        assert_eq!(style.states.len(), 1);
        assert_eq!(style.states[0].get_color(ColorType::Foreground), Some(Color::RED));
        assert_eq!(style.states[0].get_color(ColorType::Background), Some(Color::WHITE));
    }

    #[test]
    fn test_state_info_best_match() {
        let style = SynthStyle::new()
            .state(StateInfo::new(ComponentState::empty()).color(ColorType::Foreground, Color::BLACK))
            .state(StateInfo::new(ComponentState::ENABLED).color(ColorType::Foreground, Color::GRAY))
            .state(
                StateInfo::new(ComponentState::MOUSE_OVER | ComponentState::FOCUSED)
                    .color(ColorType::Foreground, Color::BLUE),
            )
            .state(StateInfo::new(ComponentState::PRESSED).color(ColorType::Foreground, Color::RED));

        let fg = |state| style.color_for_state(state, ColorType::Foreground);

        assert_eq!(fg(ComponentState::ENABLED | ComponentState::FOCUSED), Some(Color::GRAY));
        assert_eq!(
            fg(ComponentState::MOUSE_OVER | ComponentState::FOCUSED | ComponentState::SELECTED),
            Some(Color::BLUE)
        );
        // MOUSE_OVER alone does not cover MOUSE_OVER | FOCUSED
        assert_eq!(fg(ComponentState::MOUSE_OVER), Some(Color::BLACK));
        assert_eq!(fg(ComponentState::PRESSED), Some(Color::RED));
        assert_eq!(fg(ComponentState::empty()), Some(Color::BLACK));
    }

    #[test]
    fn test_state_info_falls_back_to_wildcard_per_value() {
        let style = SynthStyle::new()
            .font(Font::plain("Dialog", 12.0))
            .state(
                StateInfo::new(ComponentState::empty())
                    .color(ColorType::Background, Color::WHITE)
                    .font(Font::plain("Serif", 11.0)),
            )
            .state(StateInfo::new(ComponentState::DISABLED).color(ColorType::Foreground, Color::GRAY));

        let disabled = ComponentState::DISABLED;
        assert_eq!(style.color_for_state(disabled, ColorType::Foreground), Some(Color::GRAY));
        assert_eq!(style.color_for_state(disabled, ColorType::Background), Some(Color::WHITE));
        assert_eq!(style.font_for_state(disabled).map(Font::family), Some("Serif"));
        assert_eq!(style.color_for_state(disabled, ColorType::Focus), None);
    }

    #[test]
    fn test_font_falls_back_to_style_font() {
        let style = SynthStyle::new()
            .font(Font::plain("Dialog", 12.0))
            .state(StateInfo::new(ComponentState::PRESSED).font(Font::plain("Dialog", 13.0)));

        assert_eq!(style.font_for_state(ComponentState::ENABLED).map(Font::size), Some(12.0));
        assert_eq!(style.font_for_state(ComponentState::PRESSED).map(Font::size), Some(13.0));
    }

    #[test]
    fn test_property_lookup_order() {
        let key: PropertyKey = "Slider.thumbWidth".into();
        let style = SynthStyle::new()
            .property(key.clone(), 10i64)
            .state(StateInfo::new(ComponentState::PRESSED).property(key.clone(), 12i64));

        assert_eq!(style.get(ComponentState::PRESSED, &key), Some(&PropertyValue::Int(12)));
        assert_eq!(style.get(ComponentState::ENABLED, &key), Some(&PropertyValue::Int(10)));
        assert_eq!(style.get(ComponentState::ENABLED, &"Slider.paintValue".into()), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(SynthStyle::new().is_empty());
        assert!(!SynthStyle::new().opaque(false).is_empty());
        assert!(!SynthStyle::new().insets(Insets::uniform(1.0)).is_empty());
        assert!(!SynthStyle::new().state(StateInfo::new(enabled())).is_empty());
        assert!(!SynthStyle::new().property(WellKnownKey::ButtonTextShiftOffset, 1i64).is_empty());
    }
}
