//! Layer indicator LEDs.
//!
//! The board carries three layer indicator LEDs plus one board-level LED.
//! Which LEDs are lit is a pure function of the highest active layer index,
//! reported by the host on every scan cycle; see [`LayerIndicator::for_layer`].
//! [`LightService`] applies a pattern to the actual GPIOs and is the only
//! owner of those pins.

use bitfield_struct::bitfield;
use embedded_hal::digital::{OutputPin, PinState};

/// Source of the highest currently-active layer index.
///
/// The host firmware owns the layer activation bitset and collapses it to a
/// single index; the light service only reads it through this trait.
pub trait LayerStateReader {
    /// Index of the highest active layer, the default layer being 0.
    fn current_layer(&self) -> u8;
}

/// On/off pattern of the indicator LEDs, one bit per LED.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LayerIndicator {
    #[bits(1)]
    pub led1: bool,
    #[bits(1)]
    pub led2: bool,
    #[bits(1)]
    pub led3: bool,
    #[bits(1)]
    pub board: bool,
    #[bits(4)]
    _reserved: u8,
}

impl LayerIndicator {
    pub const LED1: Self = Self::new().with_led1(true);
    pub const LED2: Self = Self::new().with_led2(true);
    pub const LED3: Self = Self::new().with_led3(true);
    pub const BOARD: Self = Self::new().with_board(true);

    pub const fn new_from(led1: bool, led2: bool, led3: bool, board: bool) -> Self {
        Self::new()
            .with_led1(led1)
            .with_led2(led2)
            .with_led3(led3)
            .with_board(board)
    }

    /// The indicator pattern for a given highest-active-layer index.
    ///
    /// Total over `u8`: the eight enumerated layers map to their patterns,
    /// everything else (including the default layer 0) maps to all-off. The
    /// board LED is never lit by layer state.
    pub const fn for_layer(layer: u8) -> Self {
        match layer {
            1 => Self::LED1,
            2 => Self::LED2,
            3 => Self::LED3,
            4 => Self::new_from(false, true, true, false),
            5 => Self::new_from(true, true, false, false),
            6 => Self::new_from(true, false, true, false),
            7 => Self::new_from(true, true, true, false),
            _ => Self::new(),
        }
    }
}

/// A single LED behind a GPIO.
struct SingleLed<P: OutputPin> {
    /// Pin state when turning the LED on
    on_state: PinState,

    /// GPIO for controlling the LED
    pin: P,
}

impl<P: OutputPin> SingleLed<P> {
    fn new(pin: P, on_state: PinState) -> Self {
        Self { on_state, pin }
    }

    /// Turn LED on
    fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(self.on_state)
    }

    /// Turn LED off
    fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_state(!self.on_state)
    }
}

/// Driver for the indicator LEDs.
///
/// Constructing the service is the whole of initialization: beyond taking
/// ownership of the pins there is no state to establish. `sync` is invoked
/// unconditionally on every scan tick; applying the same pattern twice leaves
/// the pins unchanged, so no call needs to be guarded.
pub struct LightService<P: OutputPin> {
    enabled: bool,
    led1: Option<SingleLed<P>>,
    led2: Option<SingleLed<P>>,
    led3: Option<SingleLed<P>>,
    board: Option<SingleLed<P>>,
}

// Implement on/off function for LightService
macro_rules! impl_led_on_off {
    ($n:ident, $fn_name:ident) => {
        fn $fn_name(&mut self, state: bool) -> Result<(), P::Error> {
            if let Some(led) = &mut self.$n {
                if state { led.on()? } else { led.off()? }
            }
            Ok(())
        }
    };
}

impl<P: OutputPin> LightService<P> {
    pub fn new(
        led1_pin: Option<P>,
        led2_pin: Option<P>,
        led3_pin: Option<P>,
        board_pin: Option<P>,
        on_state: PinState,
    ) -> Self {
        let enabled = led1_pin.is_some()
            || led2_pin.is_some()
            || led3_pin.is_some()
            || board_pin.is_some();
        Self {
            enabled,
            led1: led1_pin.map(|p| SingleLed::new(p, on_state)),
            led2: led2_pin.map(|p| SingleLed::new(p, on_state)),
            led3: led3_pin.map(|p| SingleLed::new(p, on_state)),
            board: board_pin.map(|p| SingleLed::new(p, on_state)),
        }
    }

    impl_led_on_off!(led1, set_led1);
    impl_led_on_off!(led2, set_led2);
    impl_led_on_off!(led3, set_led3);
    impl_led_on_off!(board, set_board);

    /// Apply an indicator pattern to the pins.
    pub fn set_leds(&mut self, indicator: LayerIndicator) -> Result<(), P::Error> {
        if !self.enabled {
            return Ok(());
        }
        self.set_led1(indicator.led1())?;
        self.set_led2(indicator.led2())?;
        self.set_led3(indicator.led3())?;
        self.set_board(indicator.board())?;

        Ok(())
    }

    /// Per-scan-tick callback: light the LEDs for the currently active layer.
    pub fn sync<L: LayerStateReader>(&mut self, layer_state: &L) -> Result<(), P::Error> {
        let layer = layer_state.current_layer();
        let indicator = LayerIndicator::for_layer(layer);
        debug!("layer {} -> indicator {}", layer, indicator.into_bits());
        self.set_leds(indicator)
    }
}
