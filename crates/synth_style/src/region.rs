//! Regions and the per-session region registry
//!
//! A region is a logical area of a widget that can be styled on its own: a
//! whole button, or a scroll bar's thumb. Top-level regions correspond to a
//! widget type and are found through the widget's UI type identifier
//! (`"ButtonUI"` → [`Region::BUTTON`]). Subregions such as
//! [`Region::SCROLL_BAR_THUMB`] have no widget type; delegates address them
//! directly and rules reach them through region patterns.
//!
//! The built-in catalog is a closed enum. Applications add regions as data
//! through [`RegionRegistry::define`], and give new top-level regions a type
//! identifier with [`RegionRegistry::bind`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::{Result, StyleError};

macro_rules! builtin_regions {
    ($( $variant:ident => $konst:ident, $name:literal, $subregion:literal; )*) => {
        /// Regions known to every session
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BuiltinRegion {
            $( $variant, )*
        }

        impl BuiltinRegion {
            /// Every built-in region, in declaration order
            pub const ALL: &'static [BuiltinRegion] = &[ $( BuiltinRegion::$variant, )* ];

            /// Display name (PascalCase)
            pub const fn name(self) -> &'static str {
                match self {
                    $( BuiltinRegion::$variant => $name, )*
                }
            }

            pub const fn is_subregion(self) -> bool {
                match self {
                    $( BuiltinRegion::$variant => $subregion, )*
                }
            }
        }

        impl Region {
            $( pub const $konst: Region = Region::Builtin(BuiltinRegion::$variant); )*
        }
    };
}

builtin_regions! {
    ArrowButton => ARROW_BUTTON, "ArrowButton", false;
    Button => BUTTON, "Button", false;
    CheckBox => CHECK_BOX, "CheckBox", false;
    CheckBoxMenuItem => CHECK_BOX_MENU_ITEM, "CheckBoxMenuItem", false;
    ColorChooser => COLOR_CHOOSER, "ColorChooser", false;
    ComboBox => COMBO_BOX, "ComboBox", false;
    DesktopPane => DESKTOP_PANE, "DesktopPane", false;
    DesktopIcon => DESKTOP_ICON, "DesktopIcon", false;
    EditorPane => EDITOR_PANE, "EditorPane", false;
    FileChooser => FILE_CHOOSER, "FileChooser", false;
    FormattedTextField => FORMATTED_TEXT_FIELD, "FormattedTextField", false;
    InternalFrame => INTERNAL_FRAME, "InternalFrame", false;
    InternalFrameTitlePane => INTERNAL_FRAME_TITLE_PANE, "InternalFrameTitlePane", true;
    Label => LABEL, "Label", false;
    List => LIST, "List", false;
    Menu => MENU, "Menu", false;
    MenuBar => MENU_BAR, "MenuBar", false;
    MenuItem => MENU_ITEM, "MenuItem", false;
    MenuItemAccelerator => MENU_ITEM_ACCELERATOR, "MenuItemAccelerator", true;
    OptionPane => OPTION_PANE, "OptionPane", false;
    Panel => PANEL, "Panel", false;
    PasswordField => PASSWORD_FIELD, "PasswordField", false;
    PopupMenu => POPUP_MENU, "PopupMenu", false;
    PopupMenuSeparator => POPUP_MENU_SEPARATOR, "PopupMenuSeparator", false;
    ProgressBar => PROGRESS_BAR, "ProgressBar", false;
    RadioButton => RADIO_BUTTON, "RadioButton", false;
    RadioButtonMenuItem => RADIO_BUTTON_MENU_ITEM, "RadioButtonMenuItem", false;
    RootPane => ROOT_PANE, "RootPane", false;
    ScrollBar => SCROLL_BAR, "ScrollBar", false;
    ScrollBarTrack => SCROLL_BAR_TRACK, "ScrollBarTrack", true;
    ScrollBarThumb => SCROLL_BAR_THUMB, "ScrollBarThumb", true;
    ScrollPane => SCROLL_PANE, "ScrollPane", false;
    Separator => SEPARATOR, "Separator", false;
    Slider => SLIDER, "Slider", false;
    SliderTrack => SLIDER_TRACK, "SliderTrack", true;
    SliderThumb => SLIDER_THUMB, "SliderThumb", true;
    Spinner => SPINNER, "Spinner", false;
    SplitPane => SPLIT_PANE, "SplitPane", false;
    SplitPaneDivider => SPLIT_PANE_DIVIDER, "SplitPaneDivider", true;
    TabbedPane => TABBED_PANE, "TabbedPane", false;
    TabbedPaneTab => TABBED_PANE_TAB, "TabbedPaneTab", true;
    TabbedPaneTabArea => TABBED_PANE_TAB_AREA, "TabbedPaneTabArea", true;
    TabbedPaneContent => TABBED_PANE_CONTENT, "TabbedPaneContent", true;
    Table => TABLE, "Table", false;
    TableHeader => TABLE_HEADER, "TableHeader", false;
    TextArea => TEXT_AREA, "TextArea", false;
    TextField => TEXT_FIELD, "TextField", false;
    TextPane => TEXT_PANE, "TextPane", false;
    ToggleButton => TOGGLE_BUTTON, "ToggleButton", false;
    ToolBar => TOOL_BAR, "ToolBar", false;
    ToolBarContent => TOOL_BAR_CONTENT, "ToolBarContent", true;
    ToolBarDragWindow => TOOL_BAR_DRAG_WINDOW, "ToolBarDragWindow", false;
    ToolTip => TOOL_TIP, "ToolTip", false;
    ToolBarSeparator => TOOL_BAR_SEPARATOR, "ToolBarSeparator", false;
    Tree => TREE, "Tree", false;
    TreeCell => TREE_CELL, "TreeCell", true;
    Viewport => VIEWPORT, "Viewport", false;
}

impl BuiltinRegion {
    /// UI type identifier of a top-level region (`"Button"` → `"ButtonUI"`)
    pub fn type_id(self) -> Option<String> {
        if self.is_subregion() {
            None
        } else {
            Some(format!("{}UI", self.name()))
        }
    }

    /// Look a built-in region up by its display name
    pub fn from_name(name: &str) -> Option<BuiltinRegion> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }
}

/// Data of an application-defined region
#[derive(Debug)]
pub struct CustomRegion {
    name: Box<str>,
    subregion: bool,
}

/// A styleable region
///
/// Built-in regions compare by variant. Custom regions compare by identity:
/// each session hands out one instance per name.
#[derive(Clone)]
pub enum Region {
    Builtin(BuiltinRegion),
    Custom(Arc<CustomRegion>),
}

impl Region {
    /// Display name (PascalCase)
    pub fn name(&self) -> &str {
        match self {
            Region::Builtin(builtin) => builtin.name(),
            Region::Custom(custom) => &custom.name,
        }
    }

    pub fn is_subregion(&self) -> bool {
        match self {
            Region::Builtin(builtin) => builtin.is_subregion(),
            Region::Custom(custom) => custom.subregion,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Region::Builtin(_))
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Region::Builtin(a), Region::Builtin(b)) => a == b,
            (Region::Custom(a), Region::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Region::Builtin(builtin) => {
                0u8.hash(state);
                builtin.hash(state);
            }
            Region::Custom(custom) => {
                1u8.hash(state);
                std::ptr::hash(Arc::as_ptr(custom), state);
            }
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name())
            .field("subregion", &self.is_subregion())
            .finish()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<BuiltinRegion> for Region {
    fn from(builtin: BuiltinRegion) -> Self {
        Region::Builtin(builtin)
    }
}

/// Region lookups scoped to one UI session
///
/// Owns the type-identifier map (built on first lookup), the custom region
/// table, and the lower-case name cache used on the matching hot path.
pub struct RegionRegistry {
    by_type: OnceLock<RwLock<FxHashMap<Box<str>, Region>>>,
    custom: RwLock<FxHashMap<Box<str>, Region>>,
    lower_case: RwLock<FxHashMap<Region, Arc<str>>>,
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self {
            by_type: OnceLock::new(),
            custom: RwLock::new(FxHashMap::default()),
            lower_case: RwLock::new(FxHashMap::default()),
        }
    }

    fn type_map(&self) -> &RwLock<FxHashMap<Box<str>, Region>> {
        self.by_type.get_or_init(|| {
            let map = BuiltinRegion::ALL
                .iter()
                .filter_map(|&builtin| {
                    builtin
                        .type_id()
                        .map(|type_id| (type_id.into_boxed_str(), Region::Builtin(builtin)))
                })
                .collect();
            RwLock::new(map)
        })
    }

    /// Region of a widget with the given UI type identifier
    pub fn region_for(&self, type_id: &str) -> Option<Region> {
        self.type_map().read().get(type_id).cloned()
    }

    /// Find a region by display name
    pub fn region_named(&self, name: &str) -> Option<Region> {
        BuiltinRegion::from_name(name)
            .map(Region::Builtin)
            .or_else(|| self.custom.read().get(name).cloned())
    }

    /// Define an application region, or return the existing one with that name
    ///
    /// Built-in names always resolve to the built-in region.
    pub fn define(&self, name: &str, subregion: bool) -> Region {
        if let Some(existing) = self.region_named(name) {
            return existing;
        }

        self.custom
            .write()
            .entry(name.into())
            .or_insert_with(|| {
                tracing::debug!(name, subregion, "defined custom region");
                Region::Custom(Arc::new(CustomRegion {
                    name: name.into(),
                    subregion,
                }))
            })
            .clone()
    }

    /// Map a UI type identifier to a top-level region
    pub fn bind(&self, type_id: &str, region: &Region) -> Result<()> {
        if region.is_subregion() {
            return Err(StyleError::SubregionBinding {
                region: region.name().to_string(),
                type_id: type_id.to_string(),
            });
        }
        self.type_map().write().insert(type_id.into(), region.clone());
        Ok(())
    }

    /// Lower-case form of a region's name, computed once per session
    pub fn lower_case_name(&self, region: &Region) -> Arc<str> {
        if let Some(name) = self.lower_case.read().get(region) {
            return name.clone();
        }
        self.lower_case
            .write()
            .entry(region.clone())
            .or_insert_with(|| region.name().to_lowercase().into())
            .clone()
    }
}

impl fmt::Debug for RegionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionRegistry")
            .field("custom", &self.custom.read().len())
            .field("type_map_built", &self.by_type.get().is_some())
            .finish()
    }
}
