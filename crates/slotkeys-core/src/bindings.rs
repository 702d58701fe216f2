// Slotkeys Binding Table
// Turns the flat shortcut properties map into an action -> trigger-keys table

use std::collections::HashMap;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::action::{Bias, ShortcutAction, TransferMode};
use crate::key::{key_from_name, Key};

/// Property namespace consumed by the binding loader
pub const PROP_SHORTCUT_PREFIX: &str = "shortcut.";

/// Sentinel value marking a default-behavior override instead of a key list
pub const VALUE_DEFAULT: &str = "default";

/// Parsed shortcut bindings plus the two default-behavior overrides.
///
/// Rebuilt wholesale on every (re)load; there is no incremental mutation.
/// Loading is total: malformed entries are warn-logged and skipped, never
/// fatal.
#[derive(Debug, Clone)]
pub struct ShortcutBindings {
    bindings: IndexMap<ShortcutAction, SmallVec<[Key; 2]>>,
    default_mode: TransferMode,
    default_bias: Option<Bias>,
}

impl ShortcutBindings {
    /// Build the binding table from a flat key/value properties map.
    ///
    /// Only entries under the `shortcut.` prefix are considered. A value of
    /// `"default"` promotes the named action to a default-behavior override;
    /// anything else is a comma-separated list of key names, each optionally
    /// carrying a `KEY_` prefix. An entry containing an unresolvable key
    /// name fails as a whole (logged) without affecting the other entries.
    pub fn from_properties(props: &HashMap<String, String>) -> Self {
        let mut out = Self {
            bindings: IndexMap::new(),
            default_mode: TransferMode::OneStack,
            default_bias: None,
        };

        for (prop, value) in props {
            let Some(name) = prop.strip_prefix(PROP_SHORTCUT_PREFIX) else {
                continue;
            };
            let Some(action) = ShortcutAction::from_prop_name(name) else {
                // Unknown action names are not the engine's problem
                log::debug!("skipping unknown shortcut property '{}'", prop);
                continue;
            };

            if value == VALUE_DEFAULT {
                if let Some(mode) = action.transfer_mode() {
                    out.default_mode = mode;
                } else if let Some(bias) = action.bias() {
                    out.default_bias = Some(bias);
                }
                // "default" on any other action has no meaning; ignore
                continue;
            }

            match parse_key_list(value) {
                Ok(keys) => {
                    out.bindings.insert(action, keys);
                }
                Err(token) => {
                    log::warn!(
                        "ignoring binding '{}': unknown key name '{}'",
                        prop,
                        token
                    );
                }
            }
        }

        out
    }

    /// Trigger keys bound to an action (empty when none are configured)
    pub fn keys_for(&self, action: ShortcutAction) -> &[Key] {
        self.bindings
            .get(&action)
            .map(|keys| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Every key code referenced by any binding, for latch tracking
    pub fn tracked_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.bindings.values().flat_map(|keys| keys.iter().copied())
    }

    /// Transfer mode applied when no mode key is held
    pub fn default_mode(&self) -> TransferMode {
        self.default_mode
    }

    /// Destination bias applied when no up/down key is held
    pub fn default_bias(&self) -> Option<Bias> {
        self.default_bias
    }
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self::from_properties(&HashMap::new())
    }
}

/// Split a comma-separated key-name list into key codes.
///
/// Fails with the offending token on the first unresolvable name; both the
/// bare name and a `KEY_`-prefixed form are accepted.
fn parse_key_list(value: &str) -> Result<SmallVec<[Key; 2]>, String> {
    let mut keys = SmallVec::new();
    for token in value.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let name = token.strip_prefix("KEY_").unwrap_or(token);
        match key_from_name(name) {
            Some(key) => keys.push(key),
            None => return Err(token.to_string()),
        }
    }
    Ok(keys)
}
