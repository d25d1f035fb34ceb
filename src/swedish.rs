//! Swedish layout legend aliases.
//!
//! The keymap targets a host configured with the Swedish (mac) layout, so the
//! legend printed on a key and the HID usage that produces it differ for most
//! symbols. Each constant below is named after the legend and expands to the
//! US-HID keycode, plus modifiers where needed, that yields it.

use crate::action::KeyAction;
use crate::modifier::{ALGR, ModifierCombination};
use crate::{k, shifted, wm};

/// Alt + Shift, for the mac-layout brace keys.
const ALT_SHIFT: ModifierCombination = ModifierCombination::new_from(false, false, true, true, false);

/// `§` / `½`, the key left of `1`.
pub const HALF: KeyAction = k!(Grave);
/// `+` / `?`, the key right of `0`.
pub const PLUS: KeyAction = k!(Minus);
/// `´` / `` ` ``, the key right of `+`.
pub const ACUT: KeyAction = k!(Equal);
/// `Å`.
pub const AA: KeyAction = k!(LeftBracket);
/// `Ö`.
pub const OSLH: KeyAction = k!(Semicolon);
/// `Ä`.
pub const AE: KeyAction = k!(Quote);
/// `'` / `*`, the key left of Enter.
pub const APOS: KeyAction = k!(NonusHash);
/// `-` / `_`, the key right of `.`.
pub const MINS: KeyAction = k!(Slash);

/// `?`.
pub const QUES: KeyAction = shifted!(Minus);
/// `*`.
pub const ASTR: KeyAction = shifted!(NonusHash);
/// `^`.
pub const CIRC: KeyAction = shifted!(RightBracket);
/// `&`.
pub const AMPR: KeyAction = shifted!(Kc6);
/// `_`.
pub const UNDS: KeyAction = shifted!(Slash);
/// `<` on the mac layout.
pub const LESS_MAC: KeyAction = k!(Grave);
/// `>` on the mac layout.
pub const GRTR_MAC: KeyAction = shifted!(Grave);

/// `|`.
pub const PIPE: KeyAction = wm!(NonusBackslash, ALGR);
/// `[`.
pub const LBRC: KeyAction = wm!(Kc8, ALGR);
/// `]`.
pub const RBRC: KeyAction = wm!(Kc9, ALGR);
/// `~`.
pub const TILD: KeyAction = wm!(RightBracket, ALGR);
/// `{` on the mac layout.
pub const LCBR_MAC: KeyAction = wm!(Kc8, ALT_SHIFT);
/// `}` on the mac layout.
pub const RCBR_MAC: KeyAction = wm!(Kc9, ALT_SHIFT);

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::Action;
    use crate::keycode::KeyCode;
    use crate::modifier::SHIFT;

    #[test]
    fn plain_aliases() {
        assert_eq!(AA, KeyAction::Single(Action::Key(KeyCode::LeftBracket)));
        assert_eq!(OSLH, KeyAction::Single(Action::Key(KeyCode::Semicolon)));
        assert_eq!(MINS, KeyAction::Single(Action::Key(KeyCode::Slash)));
    }

    #[test]
    fn shifted_aliases() {
        assert_eq!(
            ASTR,
            KeyAction::Single(Action::KeyWithModifier(KeyCode::NonusHash, SHIFT))
        );
        assert_eq!(
            QUES,
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Minus, SHIFT))
        );
    }

    #[test]
    fn altgr_aliases() {
        assert_eq!(
            LBRC,
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Kc8, ALGR))
        );
        assert_eq!(
            TILD,
            KeyAction::Single(Action::KeyWithModifier(KeyCode::RightBracket, ALGR))
        );
    }
}
