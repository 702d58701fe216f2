// Slotkeys Shortcut Actions
// The closed set of shortcut actions a key can be bound to

use std::fmt;

use strum_macros::EnumIter;

/// A shortcut action that trigger keys can be bound to.
///
/// Three of these are transfer modes, two are destination biases, and the
/// rest stand alone. `EmptySlot` is parsed and bindable but not yet consumed
/// by the transfer logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ShortcutAction {
    /// Move the whole hovered stack
    OneStack,
    /// Move a single item off the hovered stack
    OneItem,
    /// Move every stack matching the hovered one
    AllItems,
    /// Shift the destination one region up the availability list
    Up,
    /// Shift the destination one region down the availability list
    Down,
    /// Reserved: move to the first empty slot
    EmptySlot,
    /// Remove the hovered stack from the container
    Drop,
}

impl ShortcutAction {
    /// Resolve a `shortcut.`-suffix property name to an action.
    ///
    /// Unknown names yield `None`; the binding loader skips them.
    pub fn from_prop_name(name: &str) -> Option<Self> {
        match name {
            "oneStack" => Some(ShortcutAction::OneStack),
            "oneItem" => Some(ShortcutAction::OneItem),
            "allItems" => Some(ShortcutAction::AllItems),
            "up" => Some(ShortcutAction::Up),
            "down" => Some(ShortcutAction::Down),
            "emptySlot" => Some(ShortcutAction::EmptySlot),
            "drop" => Some(ShortcutAction::Drop),
            _ => None,
        }
    }

    /// The property name this action is configured under
    pub fn prop_name(self) -> &'static str {
        match self {
            ShortcutAction::OneStack => "oneStack",
            ShortcutAction::OneItem => "oneItem",
            ShortcutAction::AllItems => "allItems",
            ShortcutAction::Up => "up",
            ShortcutAction::Down => "down",
            ShortcutAction::EmptySlot => "emptySlot",
            ShortcutAction::Drop => "drop",
        }
    }

    /// The transfer mode this action selects, if it is a transfer-mode action
    pub fn transfer_mode(self) -> Option<TransferMode> {
        match self {
            ShortcutAction::OneStack => Some(TransferMode::OneStack),
            ShortcutAction::OneItem => Some(TransferMode::OneItem),
            ShortcutAction::AllItems => Some(TransferMode::AllItems),
            _ => None,
        }
    }

    /// The destination bias this action selects, if it is a bias action
    pub fn bias(self) -> Option<Bias> {
        match self {
            ShortcutAction::Up => Some(Bias::Up),
            ShortcutAction::Down => Some(Bias::Down),
            _ => None,
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prop_name())
    }
}

/// One of the three ways a stack can be transferred.
///
/// A closed subset of [`ShortcutAction`] so that defaults and transfer
/// requests cannot carry a non-transfer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferMode {
    OneStack,
    OneItem,
    AllItems,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::OneStack => write!(f, "one-stack"),
            TransferMode::OneItem => write!(f, "one-item"),
            TransferMode::AllItems => write!(f, "all-items"),
        }
    }
}

/// Directional modifier for cyclic destination selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    Up,
    Down,
}

impl Bias {
    /// Offset applied to the source's index in the availability list
    pub fn offset(self) -> isize {
        match self {
            Bias::Up => -1,
            Bias::Down => 1,
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Up => write!(f, "up"),
            Bias::Down => write!(f, "down"),
        }
    }
}
