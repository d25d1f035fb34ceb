//! Keymap represents the stack of layers.
//!
//! The conception of keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
//!
//! A keymap is bound to the actual pcb matrix definition: every layer is a
//! `ROW` x `COL` grid of [`KeyAction`]s, and the host firmware uses the tuple
//! `(layer, row, col)` to retrieve the action for a reported key position.
//! The table is compiled into the firmware image and immutable at run time;
//! the only failure mode is a configuration error caught when the table is
//! first wrapped, never during scanning.

use core::fmt;

use crate::action::KeyAction;

/// Configuration errors detectable when a layer table is validated.
///
/// Grid-shape mismatches cannot be represented at all: every layer of a
/// `[[[KeyAction; COL]; ROW]; NUM_LAYER]` has the same dimensions by type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// A layer-control action targets a layer id outside the table.
    LayerReferenceOutOfBounds {
        layer: u8,
        row: u8,
        col: u8,
        target: u8,
    },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerReferenceOutOfBounds {
                layer,
                row,
                col,
                target,
            } => write!(
                f,
                "action at layer {layer}, position ({row}, {col}) references undefined layer {target}"
            ),
        }
    }
}

impl core::error::Error for KeymapError {}

/// A validated, immutable stack of keymap layers.
#[derive(Debug)]
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    KeyMap<'a, ROW, COL, NUM_LAYER>
{
    /// Wrap a layer table, checking that every layer-control action references
    /// a layer inside the table.
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Result<Self, KeymapError> {
        for (layer_idx, layer) in layers.iter().enumerate() {
            for (row_idx, row) in layer.iter().enumerate() {
                for (col_idx, action) in row.iter().enumerate() {
                    if let Some(target) = action.referenced_layer() {
                        if target as usize >= NUM_LAYER {
                            error!(
                                "keymap rejected: layer {}, ({}, {}) references layer {} of {}",
                                layer_idx, row_idx, col_idx, target, NUM_LAYER as u8
                            );
                            return Err(KeymapError::LayerReferenceOutOfBounds {
                                layer: layer_idx as u8,
                                row: row_idx as u8,
                                col: col_idx as u8,
                                target,
                            });
                        }
                    }
                }
            }
        }

        Ok(KeyMap { layers })
    }

    /// Fetch the action at the given position. A direct lookup, total over
    /// the valid `(layer, row, col)` domain.
    pub fn action_at(&self, layer: usize, row: usize, col: usize) -> KeyAction {
        self.layers[layer][row][col]
    }

    /// Fetch the action at the given position, `None` when the position is
    /// outside the matrix or the layer outside the table.
    pub fn get(&self, layer: usize, row: usize, col: usize) -> Option<KeyAction> {
        self.layers.get(layer)?.get(row)?.get(col).copied()
    }

    pub const fn shape(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::Action;
    use crate::keycode::KeyCode;
    use crate::{a, k, layer, lt, mo, tg};

    const COL: usize = 3;
    const ROW: usize = 2;
    const NUM_LAYER: usize = 2;

    static VALID: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
        layer!([
            [k!(A), k!(B), lt!(1, Space)],
            [mo!(1), tg!(1), k!(Enter)]
        ]),
        layer!([
            [k!(Kp1), k!(Kp2), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(No)]
        ]),
    ];

    #[test]
    fn valid_table_is_accepted() {
        let keymap = KeyMap::new(&VALID).unwrap();
        assert_eq!(keymap.shape(), (ROW, COL, NUM_LAYER));
    }

    #[test]
    fn lookup_returns_table_entries() {
        let keymap = KeyMap::new(&VALID).unwrap();
        assert_eq!(keymap.action_at(0, 0, 0), KeyAction::Single(Action::Key(KeyCode::A)));
        assert_eq!(keymap.action_at(0, 1, 0), KeyAction::Single(Action::LayerOn(1)));
        assert_eq!(keymap.action_at(1, 1, 0), KeyAction::Transparent);
        assert_eq!(keymap.get(0, 0, 1), Some(KeyAction::Single(Action::Key(KeyCode::B))));
        assert_eq!(keymap.get(NUM_LAYER, 0, 0), None);
        assert_eq!(keymap.get(0, ROW, 0), None);
    }

    #[test]
    fn dangling_layer_reference_is_rejected() {
        static BROKEN: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
            layer!([
                [k!(A), k!(B), k!(C)],
                [mo!(1), a!(No), tg!(7)]
            ]),
            layer!([
                [a!(Transparent), a!(Transparent), a!(Transparent)],
                [a!(Transparent), a!(Transparent), a!(Transparent)]
            ]),
        ];

        let err = KeyMap::new(&BROKEN).unwrap_err();
        assert_eq!(
            err,
            KeymapError::LayerReferenceOutOfBounds {
                layer: 0,
                row: 1,
                col: 2,
                target: 7,
            }
        );
    }

    #[test]
    fn tap_hold_layer_reference_is_checked() {
        static BROKEN: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
            layer!([
                [lt!(3, Space), k!(B), k!(C)],
                [k!(D), k!(E), k!(F)]
            ]),
            layer!([
                [a!(Transparent), a!(Transparent), a!(Transparent)],
                [a!(Transparent), a!(Transparent), a!(Transparent)]
            ]),
        ];

        assert!(matches!(
            KeyMap::new(&BROKEN),
            Err(KeymapError::LayerReferenceOutOfBounds { target: 3, .. })
        ));
    }
}
