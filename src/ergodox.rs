//! The canonical ErgoDox keymap.
//!
//! Key positions use a 6 x 14 grid: visual rows top to bottom, left hand on
//! columns 0-6 and right hand on columns 7-13. Row 5 is the thumb cluster.
//! Grid positions without a physical switch hold `KeyAction::No` on every
//! layer; positions a layer leaves unbound hold `KeyAction::Transparent` and
//! fall through to the next active layer below.

use crate::action::KeyAction;
use crate::keymap::{KeyMap, KeymapError};
use crate::modifier::{ALT, CTRL, GUI, HYPER, MEH, RSHIFT, SHIFT};
use crate::swedish as se;
use crate::{a, k, layer, lt, mo, mt, osl, shifted, tg, wm};

pub const ROW: usize = 6;
pub const COL: usize = 14;
pub const NUM_LAYER: usize = 4;

/// Default layer: Swedish QWERTY.
pub const BASE: usize = 0;
/// Symbols.
pub const SYMB: usize = 1;
/// Arrow keys.
pub const ARRO: usize = 2;
/// Numbers and tap/hold modifiers.
pub const NUMB: usize = 3;

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Layer 0: base, Swedish QWERTY with hyper shortcuts on the corners
    layer!([
        [wm!(L, HYPER), k!(Kc1),          k!(Kc2),  k!(Kc3),       k!(Kc4),               k!(Kc5),  k!(Escape), wm!(A, HYPER),     k!(Kc6),  k!(Kc7),     k!(Kc8),      k!(Kc9),   k!(Kc0),       wm!(T, HYPER)],
        [k!(Tab),       k!(Q),            k!(W),    k!(E),         k!(R),                 k!(T),    k!(Tab),    a!(No),            k!(Y),    k!(U),       k!(I),        k!(O),     k!(P),         k!(Backspace)],
        [k!(LCtrl),     k!(A),            k!(S),    k!(D),         k!(F),                 k!(G),    a!(No),     a!(No),            k!(H),    k!(J),       k!(K),        k!(L),     se::ASTR,      k!(RCtrl)],
        [k!(LShift),    k!(Z),            k!(X),    k!(C),         k!(V),                 k!(B),    tg!(2),     tg!(2),            k!(N),    k!(M),       k!(Comma),    k!(Dot),   se::MINS,      k!(RShift)],
        [mo!(2),        a!(No),           a!(No),   k!(LAlt),      k!(LGui),              a!(No),   a!(No),     a!(No),            k!(RGui), k!(RAlt),    a!(No),       a!(No),    mo!(2),        a!(No)],
        [k!(LAlt),      wm!(LAlt, SHIFT), a!(No),   lt!(1, Space), mt!(Backspace, SHIFT), a!(No),   a!(No),     wm!(RAlt, RSHIFT), k!(RAlt), k!(PageUp),  k!(PageDown), k!(RShift), lt!(1, Enter), a!(No)]
    ]),
    // Layer 1: symbols
    layer!([
        [a!(Transparent), se::CIRC,        a!(Transparent), a!(Transparent), wm!(Kc4, ALT),   shifted!(Kc5),   a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),      a!(Transparent),      a!(Transparent),      a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Grave),       a!(Transparent), a!(Transparent), se::QUES,        se::LESS_MAC,    se::GRTR_MAC,         se::CIRC,             se::AA,               a!(Transparent)],
        [a!(Transparent), se::AMPR,        a!(Transparent), a!(Transparent), se::PIPE,        shifted!(Grave), a!(No),          a!(No),          se::PLUS,        se::LCBR_MAC,    se::RCBR_MAC,         se::OSLH,             se::AE,               a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), se::MINS,        k!(Space),       k!(Enter),       se::UNDS,        se::LBRC,        se::RBRC,             se::TILD,             a!(Transparent),      a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(No),          a!(No),          k!(Grave),       se::APOS,        k!(International1),   k!(International2),   k!(International3),   a!(No)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),      a!(Transparent),      a!(Transparent),      a!(No)]
    ]),
    // Layer 2: arrows, with a toggle-off on the right lock position
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),  a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Up),          a!(Transparent),  a!(Transparent), a!(Transparent)],
        [a!(Transparent), k!(LAlt),        k!(LShift),      a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(No),          a!(Transparent), k!(Left),        k!(Down),        k!(Right),        a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), tg!(2),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),  a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(No),          a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),  a!(Transparent), a!(No)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),  k!(WwwBack),     a!(No)]
    ]),
    // Layer 3: numbers row restored plus tap/hold modifiers on the home positions
    layer!([
        [se::HALF,            k!(Kc1),       k!(Kc2),         k!(Kc3),   k!(Kc4),       k!(Kc5),  k!(Left),       k!(Right),       k!(Kc6),         k!(Kc7),     k!(Kc8),      k!(Kc9),        k!(Kc0),         se::PLUS],
        [k!(Delete),          k!(Q),         k!(W),           k!(E),     k!(R),         k!(T),    tg!(1),         tg!(1),          k!(Y),           k!(U),       k!(I),        k!(O),          k!(P),           se::AA],
        [k!(Backspace),       k!(A),         k!(S),           k!(D),     k!(F),         k!(G),    a!(No),         a!(No),          k!(H),           k!(J),       k!(K),        k!(L),          se::OSLH,        mt!(Quote, GUI)],
        [k!(LShift),          mt!(Z, CTRL),  k!(X),           k!(C),     k!(V),         k!(B),    mt!(No, HYPER), mt!(No, MEH),    k!(N),           k!(M),       k!(Comma),    k!(Dot),        mt!(Slash, CTRL), k!(RShift)],
        [lt!(1, NonusHash),   se::ACUT,      wm!(LShift, ALT), k!(Left), k!(Right),     a!(No),   a!(No),         a!(No),          k!(Up),          k!(Down),    se::CIRC,     se::ASTR,       osl!(1),         a!(No)],
        [mt!(Application, ALT), k!(LGui),    k!(Home),        k!(Space), k!(Backspace), k!(End),  a!(No),         a!(Transparent), mt!(Escape, CTRL), k!(PageUp), k!(PageDown), k!(Tab),        k!(Enter),       a!(No)]
    ]),
];

/// The validated keymap over [`KEYMAP`].
pub fn keymap() -> Result<KeyMap<'static, ROW, COL, NUM_LAYER>, KeymapError> {
    KeyMap::new(&KEYMAP)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::Action;
    use crate::keycode::KeyCode;

    #[test]
    fn canonical_table_validates() {
        let keymap = keymap().unwrap();
        assert_eq!(keymap.shape(), (ROW, COL, NUM_LAYER));
    }

    #[test]
    fn every_layer_reference_is_in_bounds() {
        for layer in &KEYMAP {
            for row in layer {
                for action in row {
                    if let Some(target) = action.referenced_layer() {
                        assert!((target as usize) < NUM_LAYER);
                    }
                }
            }
        }
    }

    #[test]
    fn momentary_arrows_on_base_is_a_layer_action() {
        let keymap = keymap().unwrap();
        // The bottom-left position activates the arrows layer while held,
        // it must not read as a plain keycode.
        assert_eq!(
            keymap.action_at(BASE, 4, 0),
            KeyAction::Single(Action::LayerOn(ARRO as u8))
        );
        // The lock positions next to the inner columns toggle it.
        assert_eq!(
            keymap.action_at(BASE, 3, 6),
            KeyAction::Single(Action::LayerToggle(ARRO as u8))
        );
        assert_eq!(keymap.action_at(BASE, 3, 7), keymap.action_at(BASE, 3, 6));
    }

    #[test]
    fn space_taps_and_holds_symbols() {
        let keymap = keymap().unwrap();
        assert_eq!(
            keymap.action_at(BASE, 5, 3),
            KeyAction::TapHold(Action::Key(KeyCode::Space), Action::LayerOn(SYMB as u8))
        );
        assert_eq!(
            keymap.action_at(BASE, 5, 12),
            KeyAction::TapHold(Action::Key(KeyCode::Enter), Action::LayerOn(SYMB as u8))
        );
    }

    #[test]
    fn fn_position_is_oneshot_symbols() {
        let keymap = keymap().unwrap();
        assert_eq!(
            keymap.action_at(NUMB, 4, 12),
            KeyAction::OneShot(Action::LayerOn(SYMB as u8))
        );
    }

    #[test]
    fn arrows_layer_falls_through_outside_the_cluster() {
        let keymap = keymap().unwrap();
        assert!(keymap.action_at(ARRO, 0, 0).is_transparent());
        assert_eq!(keymap.action_at(ARRO, 1, 10), KeyAction::Single(Action::Key(KeyCode::Up)));
        assert_eq!(keymap.action_at(ARRO, 2, 9), KeyAction::Single(Action::Key(KeyCode::Left)));
        assert_eq!(keymap.action_at(ARRO, 2, 10), KeyAction::Single(Action::Key(KeyCode::Down)));
        assert_eq!(keymap.action_at(ARRO, 2, 11), KeyAction::Single(Action::Key(KeyCode::Right)));
    }

    #[test]
    fn phantom_positions_are_no_on_every_layer() {
        // (2, 6) and (2, 7) have no physical switch.
        for layer in 0..NUM_LAYER {
            let keymap = keymap().unwrap();
            assert_eq!(keymap.action_at(layer, 2, 6), KeyAction::No);
            assert_eq!(keymap.action_at(layer, 2, 7), KeyAction::No);
        }
    }

    #[test]
    fn swedish_legends_on_base() {
        let keymap = keymap().unwrap();
        assert_eq!(keymap.action_at(BASE, 2, 12), se::ASTR);
        assert_eq!(keymap.action_at(BASE, 3, 12), se::MINS);
    }
}
