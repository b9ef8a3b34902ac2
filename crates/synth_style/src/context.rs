//! Resolution context handed to widget delegates
//!
//! A [`SynthContext`] bundles the widget, the region being painted, the
//! resolved style and the component state. Its lookups apply the usual
//! precedence between values set on the widget and values from the style.

use std::sync::Arc;

use synth_core::{Color, ComponentState, Font, Insets, Rect, StyledWidget};

use crate::painter::{Orientation, PaintMethod, PaintRequest, PainterHandle};
use crate::region::Region;
use crate::style::{StateInfo, SynthStyle};
use crate::tokens::{ColorType, PropertyKey, PropertyValue};

/// Widget, region, resolved style and state for one lookup or paint pass
pub struct SynthContext<'a> {
    widget: &'a dyn StyledWidget,
    region: Region,
    style: Arc<SynthStyle>,
    state: ComponentState,
    fallback_font: Font,
}

impl<'a> SynthContext<'a> {
    /// Build a context; `fallback_font` is used when neither the widget nor
    /// the style provides a font
    pub fn new(
        widget: &'a dyn StyledWidget,
        region: Region,
        style: Arc<SynthStyle>,
        state: ComponentState,
        fallback_font: Font,
    ) -> Self {
        if state.has_primary_conflict() {
            tracing::warn!(
                region = %region,
                ?state,
                "component state has conflicting primary bits set"
            );
        }

        Self {
            widget,
            region,
            style,
            state,
            fallback_font,
        }
    }

    /// Same widget, region and style, seen in another state
    pub fn with_state(&self, state: ComponentState) -> SynthContext<'a> {
        SynthContext::new(
            self.widget,
            self.region.clone(),
            self.style.clone(),
            state,
            self.fallback_font.clone(),
        )
    }

    pub fn widget(&self) -> &'a dyn StyledWidget {
        self.widget
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn style(&self) -> &Arc<SynthStyle> {
        &self.style
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    pub fn is_subregion(&self) -> bool {
        self.region.is_subregion()
    }

    /// The style's entry for the current state
    pub fn state_info(&self) -> Option<&StateInfo> {
        self.style.state_info(self.state)
    }

    fn widget_color(&self, ty: ColorType) -> Option<Color> {
        if ty.is_background() {
            self.widget.background()
        } else if ty.is_foreground() {
            self.widget.foreground()
        } else {
            None
        }
    }

    /// Color for a slot
    ///
    /// Outside the `DISABLED` state a color set on the widget wins for a
    /// top-level region. Then the style's color for the state, then the
    /// widget's own color as a last resort.
    pub fn color(&self, ty: ColorType) -> Option<Color> {
        if !self.state.contains(ComponentState::DISABLED) && !self.is_subregion() {
            if let Some(color) = self.widget_color(ty) {
                return Some(color);
            }
        }

        self.style
            .color_for_state(self.state, ty)
            .or_else(|| self.widget_color(ty))
    }

    /// Font for the current state; never absent
    pub fn font(&self) -> Font {
        if !self.is_subregion() {
            if let Some(font) = self.widget.font() {
                return font;
            }
        }

        self.style
            .font_for_state(self.state)
            .cloned()
            .unwrap_or_else(|| self.fallback_font.clone())
    }

    pub fn get(&self, key: impl Into<PropertyKey>) -> Option<&PropertyValue> {
        let key = key.into();
        self.style.get(self.state, &key)
    }

    pub fn get_int(&self, key: impl Into<PropertyKey>, default: i64) -> i64 {
        self.get(key).and_then(PropertyValue::as_int).unwrap_or(default)
    }

    pub fn get_bool(&self, key: impl Into<PropertyKey>, default: bool) -> bool {
        self.get(key).and_then(PropertyValue::as_bool).unwrap_or(default)
    }

    /// Best painter for a paint method in the current state
    pub fn painter(
        &self,
        method: &PaintMethod,
        orientation: Option<Orientation>,
    ) -> Option<&PainterHandle> {
        self.style.painter_for(self.state, method, orientation)
    }

    /// Paint `bounds` with the best painter for `method`
    ///
    /// Returns `false` when the style has no painter for it.
    pub fn paint(&self, method: &PaintMethod, bounds: Rect, orientation: Option<Orientation>) -> bool {
        let Some(painter) = self.painter(method, orientation) else {
            return false;
        };

        let mut request = PaintRequest::new(self, method, bounds);
        if let Some(orientation) = orientation {
            request = request.orientation(orientation);
        }
        painter.paint(&request);
        true
    }

    pub fn insets(&self) -> Insets {
        self.style.insets.unwrap_or(Insets::ZERO)
    }

    pub fn is_opaque(&self) -> bool {
        self.style.opaque.unwrap_or(false)
    }
}

impl std::fmt::Debug for SynthContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthContext")
            .field("widget", &self.widget.id())
            .field("region", &self.region)
            .field("state", &self.state)
            .finish()
    }
}
