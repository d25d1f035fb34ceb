//! Layered keymap and layer LED indicator logic for an ErgoDox-style split keyboard.
//!
//! The crate is pure data plus a small amount of total, constant-time logic.
//! The host firmware owns matrix scanning, tap/hold resolution, the active
//! layer stack and HID transport; this crate supplies the keymap table it
//! consumes and the per-scan-tick LED indicator callback it invokes.
//!
//! - [`keymap`] - fixed-shape layer tables, validated at construction time
//! - [`action`] - the `KeyAction`/`Action` sum types stored in the table
//! - [`keycode`] - flat HID keycode definitions
//! - [`modifier`] - modifier key combinations
//! - [`light`] - layer indicator patterns and the GPIO-backed light service
//! - [`ergodox`] - the canonical ErgoDox keymap data
//! - [`swedish`] - Swedish layout legend aliases used by the keymap

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod action;
pub mod ergodox;
pub mod keycode;
pub mod keymap;
pub mod layout_macro;
pub mod light;
pub mod modifier;
pub mod swedish;
