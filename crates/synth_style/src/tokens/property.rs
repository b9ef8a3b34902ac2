//! Typed property map
//!
//! Widget delegates look up tuning values such as `"Tree.rowHeight"` by key.
//! The keys delegates rely on are a closed enum; anything else is a custom key.
//! Parsing a string always yields the well-known variant when one exists, so
//! `"Tree.rowHeight"` typed by hand and [`WellKnownKey::TreeRowHeight`] are the
//! same key.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use synth_core::{Color, Font, Insets};

/// Property map carried by styles and style states
pub type PropertyMap = FxHashMap<PropertyKey, PropertyValue>;

macro_rules! well_known_keys {
    ($( $(#[$meta:meta])* $variant:ident => $key:literal, )*) => {
        /// Property keys consumed by the built-in widget delegates
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        pub enum WellKnownKey {
            $( $(#[$meta])* $variant, )*
        }

        impl WellKnownKey {
            pub const ALL: &'static [WellKnownKey] = &[ $( WellKnownKey::$variant, )* ];

            /// Dotted key name, e.g. `"Button.textShiftOffset"`
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( WellKnownKey::$variant => $key, )*
                }
            }

            pub fn from_name(name: &str) -> Option<WellKnownKey> {
                match name {
                    $( $key => Some(WellKnownKey::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

well_known_keys! {
    /// Pixels the label moves while the button is pressed
    ButtonTextShiftOffset => "Button.textShiftOffset",
    ButtonMargin => "Button.margin",
    CheckBoxIcon => "CheckBox.icon",
    RadioButtonIcon => "RadioButton.icon",
    ArrowButtonSize => "ArrowButton.size",
    ComboBoxShowPopupOnNavigation => "ComboBox.showPopupOnNavigation",
    ComboBoxRendererUseListColors => "ComboBox.rendererUseListColors",
    ListCellHeight => "List.cellHeight",
    ProgressBarCellLength => "ProgressBar.cellLength",
    ProgressBarCellSpacing => "ProgressBar.cellSpacing",
    ScrollBarThumbHeight => "ScrollBar.thumbHeight",
    ScrollBarAllowsAbsolutePositioning => "ScrollBar.allowsAbsolutePositioning",
    SeparatorThickness => "Separator.thickness",
    SliderThumbWidth => "Slider.thumbWidth",
    SliderThumbHeight => "Slider.thumbHeight",
    SliderPaintValue => "Slider.paintValue",
    SplitPaneSize => "SplitPane.size",
    TabbedPaneTabOverlap => "TabbedPane.tabOverlap",
    TableRowHeight => "Table.rowHeight",
    TextFieldCaretForeground => "TextField.caretForeground",
    ToolBarHandleIcon => "ToolBar.handleIcon",
    TreeRowHeight => "Tree.rowHeight",
    TreeExpandedIcon => "Tree.expandedIcon",
    TreeCollapsedIcon => "Tree.collapsedIcon",
    TreeLeftChildIndent => "Tree.leftChildIndent",
    TreeRightChildIndent => "Tree.rightChildIndent",
}

/// Key into a [`PropertyMap`]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum PropertyKey {
    Known(WellKnownKey),
    Custom(Arc<str>),
}

impl PropertyKey {
    /// Key for a dotted name, preferring the well-known variant
    pub fn parse(name: &str) -> PropertyKey {
        match WellKnownKey::from_name(name) {
            Some(known) => PropertyKey::Known(known),
            None => PropertyKey::Custom(name.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyKey::Known(known) => known.as_str(),
            PropertyKey::Custom(name) => name,
        }
    }
}

impl From<WellKnownKey> for PropertyKey {
    fn from(known: WellKnownKey) -> Self {
        PropertyKey::Known(known)
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        PropertyKey::parse(name)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image reference handed to delegates; loading and drawing happen elsewhere
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    name: Arc<str>,
    width: u32,
    height: u32,
}

impl Icon {
    pub fn new(name: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Value stored under a [`PropertyKey`]
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Color(Color),
    Font(Font),
    Insets(Insets),
    Icon(Icon),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer value; floats are truncated
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Float value; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            PropertyValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&Font> {
        match self {
            PropertyValue::Font(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_insets(&self) -> Option<Insets> {
        match self {
            PropertyValue::Insets(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&Icon> {
        match self {
            PropertyValue::Icon(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.into())
    }
}

impl From<Color> for PropertyValue {
    fn from(v: Color) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<Font> for PropertyValue {
    fn from(v: Font) -> Self {
        PropertyValue::Font(v)
    }
}

impl From<Insets> for PropertyValue {
    fn from(v: Insets) -> Self {
        PropertyValue::Insets(v)
    }
}

impl From<Icon> for PropertyValue {
    fn from(v: Icon) -> Self {
        PropertyValue::Icon(v)
    }
}
