//! Key actions stored in the keymap.
//!
//! Every matrix position holds one [`KeyAction`], a closed sum type with an
//! explicit discriminant. Keycodes and layer-control operations live in
//! separate variants instead of sharing one numeric space, so a table entry
//! is never ambiguous between "emit this usage" and "operate on a layer".
//!
//! The keymap only stores these values. Tap/hold timing, one-shot expiry and
//! the layer stack transitions they cause are resolved by the host firmware.

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A single basic operation the host can execute for a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, for all keycodes defined in the `KeyCode` enum.
    Key(KeyCode),
    /// A bare modifier combination, active while the key is held.
    Modifier(ModifierCombination),
    /// Key stroke with a modifier combination applied.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Momentarily activate a layer, deactivated on release.
    LayerOn(u8),
    /// Toggle a layer.
    LayerToggle(u8),
}

impl Action {
    /// The layer id a layer-control action targets.
    pub const fn referenced_layer(self) -> Option<u8> {
        match self {
            Action::LayerOn(n) | Action::LayerToggle(n) => Some(n),
            _ => None,
        }
    }
}

/// A KeyAction is the action at a keyboard position, stored in the keymap.
/// It can be a single action like triggering a key, or a composite keyboard
/// action like tap/hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, the next active layer below will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// Keep the action active until the next key is triggered.
    OneShot(Action),
    /// General tap/hold action: (tap_action, hold_action).
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Returns `None` for `No`, `Transparent` and composite variants.
    pub const fn to_action(self) -> Option<Action> {
        match self {
            KeyAction::Single(a) | KeyAction::OneShot(a) => Some(a),
            _ => None,
        }
    }

    /// The layer id referenced by any layer-control payload of this action,
    /// checked by keymap validation.
    pub const fn referenced_layer(self) -> Option<u8> {
        match self {
            KeyAction::Single(a) | KeyAction::OneShot(a) => a.referenced_layer(),
            KeyAction::TapHold(tap, hold) => match tap.referenced_layer() {
                Some(n) => Some(n),
                None => hold.referenced_layer(),
            },
            KeyAction::No | KeyAction::Transparent => None,
        }
    }

    pub const fn is_transparent(self) -> bool {
        matches!(self, KeyAction::Transparent)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modifier::SHIFT;

    #[test]
    fn referenced_layer_of_layer_controls() {
        assert_eq!(KeyAction::Single(Action::LayerOn(2)).referenced_layer(), Some(2));
        assert_eq!(KeyAction::Single(Action::LayerToggle(1)).referenced_layer(), Some(1));
        assert_eq!(KeyAction::OneShot(Action::LayerOn(3)).referenced_layer(), Some(3));
        assert_eq!(
            KeyAction::TapHold(Action::Key(KeyCode::Space), Action::LayerOn(1)).referenced_layer(),
            Some(1)
        );
    }

    #[test]
    fn referenced_layer_of_plain_keys() {
        assert_eq!(KeyAction::Single(Action::Key(KeyCode::A)).referenced_layer(), None);
        assert_eq!(
            KeyAction::TapHold(Action::Key(KeyCode::Backspace), Action::Modifier(SHIFT))
                .referenced_layer(),
            None
        );
        assert_eq!(KeyAction::Transparent.referenced_layer(), None);
        assert_eq!(KeyAction::No.referenced_layer(), None);
    }

    #[test]
    fn to_action_unwraps_single_variants() {
        assert_eq!(
            KeyAction::Single(Action::Key(KeyCode::A)).to_action(),
            Some(Action::Key(KeyCode::A))
        );
        assert_eq!(
            KeyAction::OneShot(Action::LayerOn(1)).to_action(),
            Some(Action::LayerOn(1))
        );
        assert_eq!(KeyAction::Transparent.to_action(), None);
    }
}
