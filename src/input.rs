//! Edge-triggered button events
//!
//! Debouncing happens before this layer. A [`ButtonSource`] reports each
//! physical press exactly once; [`PressLatch`] is a ready-made source that an
//! interrupt handler can feed.

use core::cell::Cell;

use critical_section::Mutex;

use crate::session::Press;

/// One of the two front buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    One,
    Two,
}

impl Button {
    const fn mask(self) -> u8 {
        match self {
            Self::One => 0b01,
            Self::Two => 0b10,
        }
    }
}

/// Source of debounced press events
pub trait ButtonSource {
    /// Whether `button` was pressed since the last call; reading clears it
    fn was_pressed(&mut self, button: Button) -> bool;
}

/// Press flags shared between an interrupt handler and the render loop
pub struct PressLatch {
    pending: Mutex<Cell<u8>>,
}

impl Default for PressLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PressLatch {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Record a press; repeated presses before the next read collapse to one
    pub fn record(&self, button: Button) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get() | button.mask());
        });
    }

    /// Read and clear the flag of `button`
    pub fn take(&self, button: Button) -> bool {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            let flags = pending.get();
            pending.set(flags & !button.mask());
            flags & button.mask() != 0
        })
    }
}

impl ButtonSource for &PressLatch {
    fn was_pressed(&mut self, button: Button) -> bool {
        self.take(button)
    }
}

/// Read both buttons once and combine them into a single press
///
/// Both flags are always read so a press on one button never lingers into
/// the next poll.
pub fn poll_press<B: ButtonSource + ?Sized>(source: &mut B) -> Option<Press> {
    let one = source.was_pressed(Button::One);
    let two = source.was_pressed(Button::Two);
    match (one, two) {
        (true, true) => Some(Press::Both),
        (true, false) => Some(Press::Button1),
        (false, true) => Some(Press::Button2),
        (false, false) => None,
    }
}
