// Slotkeys Key Latch Tracker
// Debounced "currently held" state for every key the bindings reference

use std::collections::HashMap;

use crate::action::ShortcutAction;
use crate::bindings::ShortcutBindings;
use crate::host::UiHost;
use crate::key::Key;

/// Per-key engaged/not-engaged state, scoped to the keys the binding table
/// references.
///
/// Rebuilt from the bindings on every reload, which drops latches for codes
/// no longer bound. Only [`update`](Self::update) mutates the state; every
/// other component reads it.
#[derive(Debug, Default)]
pub struct LatchTracker {
    latches: HashMap<u16, bool>,
}

impl LatchTracker {
    /// Seed a latch (not engaged) for every key the bindings reference
    pub fn from_bindings(bindings: &ShortcutBindings) -> Self {
        let latches = bindings
            .tracked_keys()
            .map(|key| (key.code(), false))
            .collect();
        Self { latches }
    }

    /// Refresh every latch from raw hardware state.
    ///
    /// Runs once per poll tick before action resolution. A latch stays set
    /// for as long as the hardware reports the key down and clears as soon
    /// as it reports it up; this is a held signal, not a press edge.
    pub fn update<H: UiHost>(&mut self, host: &H) {
        for (code, engaged) in self.latches.iter_mut() {
            if host.is_key_down(Key::from(*code)) {
                if !*engaged {
                    *engaged = true;
                }
            } else {
                *engaged = false;
            }
        }
    }

    /// Whether a tracked key is currently engaged
    pub fn is_engaged(&self, key: Key) -> bool {
        self.latches.get(&key.code()).copied().unwrap_or(false)
    }

    /// True iff any key bound to the action is currently engaged.
    /// An action with no bound keys is never active.
    pub fn is_action_active(&self, bindings: &ShortcutBindings, action: ShortcutAction) -> bool {
        bindings
            .keys_for(action)
            .iter()
            .any(|key| self.is_engaged(*key))
    }

    /// Number of tracked key codes
    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }
}
