#![no_std]

pub mod animation;
pub mod bounds;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
pub mod frame;
pub mod input;
#[cfg(feature = "esp32-log")]
pub mod logger;
pub mod math8;
pub mod renderer;
pub mod scheduler;
pub mod segment;
pub mod session;
pub mod time;

pub use animation::{AnimationGate, Drained, StartupAnimation, run_startup_animation};
pub use bounds::{DeviceLayout, RingBounds};
pub use config::{
    AppConfig, DDay, ModePayload, NightMode, Preset, RingConfig, RingMode, SegmentConfig,
    SegmentMode,
};
pub use controller::Controller;
pub use effect::{ColorMode, EffectSlot, Palette};
pub use frame::{FrameBuffer, PixelSink, SmartLedsOutput};
pub use input::{Button, ButtonSource, PressLatch};
pub use renderer::{FrameSummary, RenderOutcome, Renderer, SkipReason};
pub use scheduler::{FrameResult, TickScheduler};
pub use segment::{DecimalPoint, DigitReadout, SegmentFrame, SegmentSink};
pub use session::{PomodoroPhase, Press, SessionKind, SessionSettings, SessionState};
pub use time::{ClockSource, LocalTime, TimeUnit};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameBuffer`] is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
