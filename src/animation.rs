//! Boot animation and the barrier that hands the pixels to the main loop
//!
//! The animation may run on its own task while the device waits for the
//! wall clock. Both share the pixel sink, so the main loop only starts
//! after [`AnimationGate::stop_and_drain`] has seen the task exit. The
//! returned [`Drained`] token is required to build a
//! [`Controller`](crate::controller::Controller).

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::bounds::DeviceLayout;
use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::frame::PixelSink;
use crate::math8::scale8;

/// Delay between animation frames
pub const ANIMATION_FRAME: Duration = Duration::from_millis(40);
/// Time the comet head spends on one pixel
const STEP_MS: u64 = 60;
/// Time for the hue to advance by one step
const HUE_STEP_MS: u64 = 20;
/// Comet length including the head
const TAIL_LEN: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Idle,
    Running,
    StopRequested,
    Finished,
}

/// Cancellation flag and exit barrier for the startup animation task
pub struct AnimationGate {
    state: Mutex<Cell<GateState>>,
}

impl Default for AnimationGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationGate {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(GateState::Idle)),
        }
    }

    /// Claim the gate for the animation task. Fails if the animation was
    /// already run or stopped before it started.
    pub fn begin(&self) -> bool {
        self.transition(|state| match state {
            GateState::Idle => Some(GateState::Running),
            _ => None,
        })
    }

    /// Whether the animation task may draw another frame
    pub fn should_continue(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get() == GateState::Running)
    }

    /// Called by the animation task after its last write
    pub fn finish(&self) {
        critical_section::with(|cs| self.state.borrow(cs).set(GateState::Finished));
    }

    pub fn is_finished(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get() == GateState::Finished)
    }

    /// Ask the task to stop. An animation that never started is finished
    /// right away.
    pub fn request_stop(&self) {
        self.transition(|state| match state {
            GateState::Idle => Some(GateState::Finished),
            GateState::Running => Some(GateState::StopRequested),
            GateState::StopRequested | GateState::Finished => None,
        });
    }

    /// Stop the animation and wait until it has exited
    ///
    /// `wait` is called between checks; pass a yield or a short sleep.
    pub fn stop_and_drain(&self, mut wait: impl FnMut()) -> Drained {
        self.request_stop();
        while !self.is_finished() {
            wait();
        }
        log::debug!("startup animation drained");
        Drained { _private: () }
    }

    fn transition(&self, next: impl FnOnce(GateState) -> Option<GateState>) -> bool {
        critical_section::with(|cs| {
            let state = self.state.borrow(cs);
            match next(state.get()) {
                Some(new_state) => {
                    state.set(new_state);
                    true
                }
                None => false,
            }
        })
    }
}

/// Proof that no animation task writes to the pixels anymore
#[derive(Debug)]
pub struct Drained {
    _private: (),
}

impl Drained {
    /// Token for devices that never start an animation
    pub const fn no_animation() -> Self {
        Self { _private: () }
    }
}

/// Rainbow comets circling both rings in opposite directions
pub struct StartupAnimation {
    layout: DeviceLayout,
}

impl StartupAnimation {
    pub const fn new(layout: DeviceLayout) -> Self {
        Self { layout }
    }

    /// Draw and commit the frame `elapsed` into the animation
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw<P: PixelSink + ?Sized>(&self, elapsed: Duration, sink: &mut P) {
        let elapsed_ms = elapsed.as_millis();
        let step = (elapsed_ms / STEP_MS) as usize;
        let color = hsv2rgb(Hsv {
            hue: (elapsed_ms / HUE_STEP_MS) as u8,
            sat: 255,
            val: 255,
        });

        sink.clear();
        for (ring_index, bounds) in self.layout.rings().into_iter().enumerate() {
            let count = bounds.count;
            if count == 0 {
                continue;
            }
            let head = step % count;
            for tail in 0..TAIL_LEN.min(count) {
                let position = if ring_index % 2 == 0 {
                    (head + count - tail) % count
                } else {
                    (count - head + tail) % count
                };
                sink.set_pixel_color(bounds.offset + position, fade(color, tail));
            }
        }
        sink.show();
    }
}

#[allow(clippy::cast_possible_truncation)]
fn fade(color: Rgb, tail: usize) -> Rgb {
    let level = (255 - tail * 255 / TAIL_LEN) as u8;
    Rgb {
        r: scale8(color.r, level),
        g: scale8(color.g, level),
        b: scale8(color.b, level),
    }
}

/// Body of the startup animation task
///
/// Draws until the gate asks to stop, blanks the pixels and then releases
/// the gate. Returns immediately if the gate was already stopped.
pub fn run_startup_animation<P, N, D>(
    gate: &AnimationGate,
    sink: &mut P,
    layout: DeviceLayout,
    mut now: N,
    mut delay: D,
) where
    P: PixelSink + ?Sized,
    N: FnMut() -> Instant,
    D: FnMut(Duration),
{
    if !gate.begin() {
        return;
    }
    log::debug!("startup animation running");

    let animation = StartupAnimation::new(layout);
    let started = now();
    while gate.should_continue() {
        let elapsed = now()
            .checked_duration_since(started)
            .unwrap_or(Duration::from_ticks(0));
        animation.draw(elapsed, sink);
        delay(ANIMATION_FRAME);
    }

    sink.clear();
    sink.show();
    gate.finish();
}
