//! Desktop simulator for the timetape display
//!
//! Draws both LED rings and the three digits from the real controller, with
//! the two front buttons, preset selection and a time speed control.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Instant as StdInstant;

use chrono::{Local, NaiveDateTime, TimeDelta};
use eframe::egui::{self};
use timetape_composer::{
    AnimationGate, AppConfig, Button, ColorMode, Controller, DDay, DeviceLayout, Duration,
    FrameBuffer, Instant, LocalTime, ModePayload, OutputDriver, Palette, PressLatch, Preset,
    RenderOutcome, Rgb, RingConfig, RingMode, SegmentConfig, SegmentFrame, SegmentMode,
    SegmentSink, StartupAnimation, color::rgb_from_u32, config::ConfigError,
};

/// Pixels on the chain: 16 inner + 24 outer
const MAX_LEDS: usize = 40;

/// Length of the boot animation in simulated time
const BOOT_ANIMATION_MS: u64 = 1_500;

/// Controller tick period in simulated time
const TICK_MS: u64 = 100;

/// Ticks to replay at most per UI frame before skipping ahead
const MAX_TICKS_PER_FRAME: u64 = 50;

const LED_SIZE: f32 = 9.0;
const INNER_RADIUS: f32 = 70.0;
const OUTER_RADIUS: f32 = 110.0;

const DIGIT_WIDTH: f32 = 34.0;
const DIGIT_HEIGHT: f32 = 60.0;
const SEGMENT_THICKNESS: f32 = 6.0;

const SEGMENT_ON: egui::Color32 = egui::Color32::from_rgb(255, 60, 40);
const SEGMENT_OFF: egui::Color32 = egui::Color32::from_rgb(40, 20, 20);

/// Front button latch shared with the controller
static BUTTONS: PressLatch = PressLatch::new();

/// Output driver keeping the last committed frame for drawing
#[derive(Default)]
struct CapturedFrame {
    colors: Vec<Rgb>,
}

impl OutputDriver for CapturedFrame {
    fn write(&mut self, colors: &[Rgb]) {
        self.colors.clear();
        self.colors.extend_from_slice(colors);
    }
}

#[derive(Default)]
struct DigitLatch {
    frame: Option<SegmentFrame>,
}

impl SegmentSink for DigitLatch {
    fn write_raw(&mut self, frame: SegmentFrame) {
        self.frame = Some(frame);
    }
}

type Pixels = FrameBuffer<MAX_LEDS, CapturedFrame>;
type Device = Controller<MAX_LEDS, Pixels, DigitLatch, &'static PressLatch>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 640.0])
            .with_title("Timetape Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "timetape-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

fn palette(fill: u32, fill2: u32) -> Palette {
    Palette {
        fill: rgb_from_u32(fill),
        fill2: rgb_from_u32(fill2),
        empty: rgb_from_u32(0x10_10_10),
    }
}

fn ring(mode: RingMode, color_mode: ColorMode, palette: Palette, payload: ModePayload) -> RingConfig {
    RingConfig::new(mode, color_mode, palette, payload)
}

/// Factory preset plus one preset per mode family
fn demo_config() -> Result<(AppConfig, Vec<&'static str>), ConfigError> {
    let mut config = AppConfig::default();
    let mut names = vec!["year"];
    config.night.enabled = true;
    config.push_dday(DDay::new("Summer", "2025-06-01", "2025-09-01")?)?;

    let mut add = |name, preset| -> Result<(), ConfigError> {
        config.push_preset(preset)?;
        names.push(name);
        Ok(())
    };

    add(
        "month / week",
        Preset::new(
            ring(RingMode::Month, ColorMode::Rainbow, palette(0xFF_FFFF, 0), ModePayload::None),
            ring(RingMode::Week, ColorMode::TimeGradient, palette(0x00_80FF, 0xFF_4000), ModePayload::None),
            SegmentConfig::new(SegmentMode::Week, ModePayload::None),
        ),
    )?;
    add(
        "day / quarter",
        Preset::new(
            ring(RingMode::Day, ColorMode::SpaceGradient, palette(0xFF_D000, 0x80_00FF), ModePayload::None),
            ring(RingMode::Quarter, ColorMode::Solid, palette(0x00_FF80, 0), ModePayload::None),
            SegmentConfig::new(SegmentMode::Day, ModePayload::None),
        ),
    )?;
    add(
        "d-day",
        Preset::new(
            ring(RingMode::DDay, ColorMode::TimeGradient, palette(0x00_FF00, 0xFF_0000), ModePayload::DDay { index: 1 }),
            ring(RingMode::Year, ColorMode::Solid, palette(0x00_00FF, 0), ModePayload::None),
            SegmentConfig::new(SegmentMode::DDay, ModePayload::DDay { index: 1 }),
        ),
    )?;
    add(
        "counter",
        Preset::new(
            ring(RingMode::Counter, ColorMode::Rainbow, palette(0, 0), ModePayload::Counter { target: 20 }),
            ring(RingMode::Year, ColorMode::Solid, palette(0x00_00FF, 0), ModePayload::None),
            SegmentConfig::new(SegmentMode::Counter, ModePayload::None),
        ),
    )?;
    add(
        "timer",
        Preset::new(
            ring(
                RingMode::Timer,
                ColorMode::TimeGradient,
                palette(0x00_FF00, 0xFF_0000),
                ModePayload::Timer {
                    total_seconds: 90,
                    display_seconds: true,
                },
            ),
            ring(RingMode::Day, ColorMode::Solid, palette(0xFF_8000, 0), ModePayload::None),
            SegmentConfig::default(),
        ),
    )?;
    add(
        "pomodoro",
        Preset::new(
            ring(RingMode::Month, ColorMode::Solid, palette(0x40_40FF, 0), ModePayload::None),
            ring(
                RingMode::Pomodoro,
                ColorMode::SpaceGradient,
                palette(0xFF_2000, 0xFF_C000),
                ModePayload::Pomodoro {
                    work_minutes: 1,
                    rest_minutes: 1,
                    display_seconds: true,
                },
            ),
            SegmentConfig::new(SegmentMode::Pomodoro, ModePayload::None),
        ),
    )?;

    Ok((config, names))
}

struct PreviewApp {
    config: AppConfig,
    preset_names: Vec<&'static str>,
    layout: DeviceLayout,

    /// Boot animation state, dropped once the controller takes over
    gate: AnimationGate,
    boot: Option<(StartupAnimation, Pixels)>,
    device: Option<Device>,
    last_outcome: Option<RenderOutcome>,

    /// Simulated wall clock at `t_ms == 0`
    wall_start: NaiveDateTime,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Next controller tick in synthetic time
    next_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether time is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let (config, preset_names) = demo_config().unwrap_or_else(|_| (AppConfig::default(), vec!["year"]));
        let layout = DeviceLayout::default();
        let gate = AnimationGate::new();
        gate.begin();

        Self {
            config,
            preset_names,
            layout,
            gate,
            boot: Some((
                StartupAnimation::new(layout),
                FrameBuffer::new(CapturedFrame::default()),
            )),
            device: None,
            last_outcome: None,
            wall_start: Local::now().naive_local(),
            t_ms: 0,
            next_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.saturating_add(delta_ms);
        }
    }

    fn local_time_at(&self, t_ms: u64) -> LocalTime {
        let offset = TimeDelta::milliseconds(i64::try_from(t_ms).unwrap_or(i64::MAX));
        let wall = self
            .wall_start
            .checked_add_signed(offset)
            .unwrap_or(self.wall_start);
        LocalTime::from_naive(&wall)
    }

    /// Advance the boot animation or the controller up to `t_ms`
    fn step(&mut self) {
        if let Some((animation, pixels)) = self.boot.as_mut() {
            if self.t_ms < BOOT_ANIMATION_MS && self.gate.should_continue() {
                animation.draw(Duration::from_millis(self.t_ms), pixels);
                return;
            }
            self.gate.request_stop();
            self.gate.finish();
        }
        if let Some((_, pixels)) = self.boot.take() {
            let drained = self.gate.stop_and_drain(std::thread::yield_now);
            self.device = Some(Controller::new(
                drained,
                self.layout,
                pixels,
                DigitLatch::default(),
                &BUTTONS,
            ));
            self.next_tick_ms = self.t_ms;
        }

        if self.t_ms.saturating_sub(self.next_tick_ms) > MAX_TICKS_PER_FRAME * TICK_MS {
            self.next_tick_ms = self.t_ms;
        }
        while self.next_tick_ms <= self.t_ms {
            let tick_ms = self.next_tick_ms;
            let time = self.local_time_at(tick_ms);
            if let Some(device) = self.device.as_mut() {
                self.last_outcome =
                    Some(device.tick(Instant::from_millis(tick_ms), &self.config, Some(&time)));
            }
            self.next_tick_ms += TICK_MS;
        }
    }

    fn frame_colors(&self) -> &[Rgb] {
        match (&self.boot, &self.device) {
            (Some((_, pixels)), _) => &pixels.output().colors,
            (None, Some(device)) => &device.pixels().output().colors,
            (None, None) => &[],
        }
    }

    fn session_status(&self) -> String {
        let Some(device) = &self.device else {
            return "booting".to_owned();
        };
        let session = device.session();
        format!(
            "counter {} | timer {}{} | pomodoro {}{}",
            session.counter_value(),
            if session.is_timer_running() { "running" } else { "stopped" },
            if session.is_timer_finished() { " (finished)" } else { "" },
            session.pomodoro_phase().as_str(),
            if session.is_pomodoro_running() { " running" } else { "" },
        )
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.step();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }
                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=600.0).logarithmic(true));
            });
            let wall = self.local_time_at(self.t_ms);
            ui.label(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                wall.year,
                wall.month + 1,
                wall.day,
                wall.hour,
                wall.minute,
                wall.second
            ));
            // </PlaybackControls>

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Preset:");
                let current = self.config.current_preset_index();
                let mut selected = current;
                egui::ComboBox::from_id_salt("preset_selector")
                    .selected_text(self.preset_names.get(current).copied().unwrap_or("?"))
                    .show_ui(ui, |ui| {
                        for (index, name) in self.preset_names.iter().enumerate() {
                            ui.selectable_value(&mut selected, index, *name);
                        }
                    });
                if selected != current {
                    self.config.set_current_preset(selected);
                }

                ui.add_space(16.0);
                if ui.button("B1").clicked() {
                    BUTTONS.record(Button::One);
                }
                if ui.button("B2").clicked() {
                    BUTTONS.record(Button::Two);
                }
                if ui.button("B1 + B2").clicked() {
                    BUTTONS.record(Button::One);
                    BUTTONS.record(Button::Two);
                }
            });

            ui.label(self.session_status());
            if let Some(RenderOutcome::Rendered(summary)) = self.last_outcome {
                ui.label(format!(
                    "digits: {} | brightness {}{}",
                    summary.segment_mode.as_str(),
                    summary.brightness,
                    if summary.rings_blanked { " | blink" } else { "" }
                ));
            }

            ui.add_space(16.0);

            // === Device ===
            let size = egui::vec2(ui.available_width(), 2.0 * OUTER_RADIUS + 3.0 * DIGIT_HEIGHT);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let center = egui::pos2(response.rect.center().x, response.rect.min.y + OUTER_RADIUS + 20.0);

            let colors = self.frame_colors();
            for bounds in self.layout.rings() {
                let radius = if bounds.offset == 0 { INNER_RADIUS } else { OUTER_RADIUS };
                #[allow(clippy::cast_precision_loss)]
                for index in 0..bounds.count {
                    let angle = index as f32 / bounds.count as f32 * TAU - FRAC_PI_2;
                    let position = center + radius * egui::vec2(angle.cos(), angle.sin());
                    let pixel = colors.get(bounds.offset + index).copied().unwrap_or_default();
                    painter.circle_filled(
                        position,
                        LED_SIZE / 2.0,
                        egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b),
                    );
                }
            }

            let digits = self
                .device
                .as_ref()
                .and_then(|device| device.segments().frame)
                .unwrap_or(SegmentFrame::BLANK);
            let digits_origin = egui::pos2(
                center.x - 1.5 * (DIGIT_WIDTH + SEGMENT_THICKNESS * 2.0),
                center.y + OUTER_RADIUS + 30.0,
            );
            for (slot, pattern) in [digits.hundreds(), digits.tens(), digits.ones()].into_iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let x = digits_origin.x + slot as f32 * (DIGIT_WIDTH + SEGMENT_THICKNESS * 2.0);
                draw_digit(&painter, egui::pos2(x, digits_origin.y), pattern);
            }
        });
    }
}

/// Draw one active-low digit pattern; bit 0 is segment `a`, bit 7 the
/// decimal point
fn draw_digit(painter: &egui::Painter, origin: egui::Pos2, pattern: u8) {
    let w = DIGIT_WIDTH;
    let h = DIGIT_HEIGHT / 2.0;
    let t = SEGMENT_THICKNESS;
    let horizontal = |x: f32, y: f32| egui::Rect::from_min_size(origin + egui::vec2(x, y), egui::vec2(w, t));
    let vertical = |x: f32, y: f32| egui::Rect::from_min_size(origin + egui::vec2(x, y), egui::vec2(t, h));

    let segments = [
        horizontal(0.0, -t / 2.0),
        vertical(w - t / 2.0, 0.0),
        vertical(w - t / 2.0, h),
        horizontal(0.0, 2.0 * h - t / 2.0),
        vertical(-t / 2.0, h),
        vertical(-t / 2.0, 0.0),
        horizontal(0.0, h - t / 2.0),
    ];
    for (bit, rect) in segments.into_iter().enumerate() {
        let lit = pattern & (1 << bit) == 0;
        painter.rect_filled(rect, 2.0, if lit { SEGMENT_ON } else { SEGMENT_OFF });
    }

    let lit = pattern & 0x80 == 0;
    painter.circle_filled(
        origin + egui::vec2(w + t, 2.0 * h),
        t / 2.0,
        if lit { SEGMENT_ON } else { SEGMENT_OFF },
    );
}
