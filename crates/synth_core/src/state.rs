//! Component state bitmask
//!
//! Widget delegates describe "what is happening to me right now" as a bitmask.
//! One of the primary bits (`ENABLED`, `MOUSE_OVER`, `PRESSED`, `DISABLED`) is
//! expected to be set; `FOCUSED`, `SELECTED` and `DEFAULT` combine freely with
//! it. Styles use the mask to pick per-state colors, fonts and painters.
//!
//! The mask is not validated: computing a sensible one is the caller's job.

bitflags::bitflags! {
    /// Interaction state of a widget or one of its regions
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ComponentState: u32 {
        const ENABLED    = 1 << 0;
        const MOUSE_OVER = 1 << 1;
        const PRESSED    = 1 << 2;
        const DISABLED   = 1 << 3;
        const FOCUSED    = 1 << 8;
        const SELECTED   = 1 << 9;
        const DEFAULT    = 1 << 10;
    }
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::empty()
    }
}

impl ComponentState {
    /// The mutually significant bits
    pub const PRIMARY: ComponentState = ComponentState::ENABLED
        .union(ComponentState::MOUSE_OVER)
        .union(ComponentState::PRESSED)
        .union(ComponentState::DISABLED);

    /// State of a plain widget: enabled (optionally focused) or disabled
    pub fn for_enabled(enabled: bool, focused: bool) -> Self {
        if !enabled {
            return ComponentState::DISABLED;
        }
        if focused {
            ComponentState::ENABLED | ComponentState::FOCUSED
        } else {
            ComponentState::ENABLED
        }
    }

    /// State a renderer paints with while standing in for a selected cell
    ///
    /// Lists, trees and tables paint their cells through a shared renderer;
    /// the owner computes this mask and scopes it for the duration of the paint.
    pub fn for_selected_ui(selected: bool, focused: bool, enabled: bool, rollover: bool) -> Self {
        let mut state = if selected {
            ComponentState::SELECTED
        } else if rollover && enabled {
            ComponentState::MOUSE_OVER | ComponentState::ENABLED
        } else if enabled {
            ComponentState::ENABLED
        } else {
            return ComponentState::DISABLED;
        };

        if focused {
            state |= ComponentState::FOCUSED;
        }
        state
    }

    /// State of a button derived from its model
    pub fn for_button(model: &ButtonModel) -> Self {
        let mut state = if model.enabled {
            ComponentState::ENABLED
        } else {
            ComponentState::DISABLED
        };

        if model.pressed {
            state = if model.armed {
                ComponentState::PRESSED
            } else {
                ComponentState::MOUSE_OVER
            };
        }
        if model.rollover {
            state |= ComponentState::MOUSE_OVER;
        }
        if model.selected {
            state |= ComponentState::SELECTED;
        }
        if model.focused && model.focus_painted {
            state |= ComponentState::FOCUSED;
        }
        if model.default_button {
            state |= ComponentState::DEFAULT;
        }
        state
    }

    /// Only the primary bits of this mask
    pub fn primary(self) -> Self {
        self & Self::PRIMARY
    }

    /// Whether exactly one primary bit is set
    pub fn is_primary_exclusive(self) -> bool {
        self.primary().bits().count_ones() == 1
    }

    /// Whether the primary bits contradict each other
    ///
    /// `MOUSE_OVER` may accompany any other primary bit.
    pub fn has_primary_conflict(self) -> bool {
        self.primary()
            .difference(Self::MOUSE_OVER)
            .bits()
            .count_ones()
            > 1
    }

    /// Number of bits set; used to rank partial state matches
    pub fn bit_count(self) -> u32 {
        self.bits().count_ones()
    }
}

/// Snapshot of a button's model flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonModel {
    pub enabled: bool,
    pub pressed: bool,
    /// Pointer is still over the button while pressed
    pub armed: bool,
    pub rollover: bool,
    pub selected: bool,
    pub focused: bool,
    pub focus_painted: bool,
    pub default_button: bool,
}

impl Default for ButtonModel {
    fn default() -> Self {
        Self {
            enabled: true,
            pressed: false,
            armed: false,
            rollover: false,
            selected: false,
            focused: false,
            focus_painted: true,
            default_button: false,
        }
    }
}
