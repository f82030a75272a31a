use embassy_time::Instant;

use crate::animation::Drained;
use crate::bounds::DeviceLayout;
use crate::config::AppConfig;
use crate::frame::PixelSink;
use crate::input::{ButtonSource, poll_press};
use crate::renderer::{RenderOutcome, Renderer};
use crate::segment::SegmentSink;
use crate::session::{SessionSettings, SessionState};
use crate::time::LocalTime;

/// Main loop state: the sinks, the buttons and the one session state
///
/// Creating a controller requires a [`Drained`] token, so the startup
/// animation has stopped writing to the pixels before the first tick.
pub struct Controller<const MAX_LEDS: usize, P, S, B> {
    renderer: Renderer<MAX_LEDS>,
    session: SessionState,
    pixels: P,
    segments: S,
    buttons: B,
}

impl<const MAX_LEDS: usize, P, S, B> Controller<MAX_LEDS, P, S, B>
where
    P: PixelSink,
    S: SegmentSink,
    B: ButtonSource,
{
    pub fn new(_drained: Drained, layout: DeviceLayout, pixels: P, segments: S, buttons: B) -> Self {
        Self {
            renderer: Renderer::new(layout),
            session: SessionState::new(),
            pixels,
            segments,
            buttons,
        }
    }

    /// Run one tick: buttons, session update, then render
    ///
    /// Presses go to the session of the active preset's interactive ring
    /// and are dropped when there is none.
    pub fn tick(
        &mut self,
        now: Instant,
        config: &AppConfig,
        time: Option<&LocalTime>,
    ) -> RenderOutcome {
        let press = poll_press(&mut self.buttons);

        if let Some(preset) = config.active_preset() {
            if let (Some(press), Some(kind)) = (press, preset.active_session()) {
                self.session.press(kind, press, now);
            }
            self.session
                .update(&SessionSettings::for_preset(preset), now);
        }

        self.renderer.render(
            config,
            time,
            &self.session,
            now,
            &mut self.pixels,
            &mut self.segments,
        )
    }

    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub const fn pixels(&self) -> &P {
        &self.pixels
    }

    pub const fn segments(&self) -> &S {
        &self.segments
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub const fn layout(&self) -> &DeviceLayout {
        self.renderer.layout()
    }
}
