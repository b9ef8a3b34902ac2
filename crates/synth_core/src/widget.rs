//! Widget handle read by the style engine

use crate::{Color, Font};

/// Stable identity of a widget within a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

/// What the style engine needs to know about a widget
///
/// Concrete widgets live outside this workspace. They expose an identity, an
/// optional instance name that name rules match against, and the UI type
/// identifier (`"ButtonUI"`, `"ScrollBarUI"`, ...) that maps them to a region.
/// Colors and fonts set explicitly on the widget take precedence over the
/// style for top-level regions.
pub trait StyledWidget: Send + Sync {
    /// Widget identity
    fn id(&self) -> WidgetId;

    /// Instance name, if one was assigned
    fn name(&self) -> Option<&str>;

    /// UI type identifier used to find the widget's region
    fn ui_key(&self) -> &str;

    fn is_enabled(&self) -> bool {
        true
    }

    fn is_focus_owner(&self) -> bool {
        false
    }

    /// Explicit foreground color set on the widget
    fn foreground(&self) -> Option<Color> {
        None
    }

    /// Explicit background color set on the widget
    fn background(&self) -> Option<Color> {
        None
    }

    /// Explicit font set on the widget
    fn font(&self) -> Option<Font> {
        None
    }
}
