//! Submit button animation sequencer
//!
//! The choreography is a fixed chain of five stages: the button fills solid,
//! shrinks into a circle, sweeps a progress ring, scales back out while a
//! check mark fades in, then fills with the success color. Each stage
//! interpolates a declared set of [`ButtonParams`] fields over its duration.
//!
//! The sequencer is deliberately not a general animation framework: the
//! stage list, durations and easings are hardcoded, and the whole timeline
//! is replayed as a pure function of elapsed time on every tick. That makes
//! the animation frame-skip tolerant and lets tests sample any instant
//! deterministically.

use std::time::{Duration, Instant};

use iced::Color;

use super::easing::Easing;
use crate::ui::theme;

/// Label size at rest (and at both ends of the stage-1 bounce).
const TEXT_SIZE: f32 = 22.0;
/// Label size at the bottom of the stage-1 bounce.
const TEXT_SIZE_DIPPED: f32 = 18.0;

/// Construction-time configuration for the button animation.
///
/// Injected rather than hardcoded so tests can run with short durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonMetrics {
    /// Base duration unit D; every stage length is a multiple of it.
    pub base_duration: Duration,
    /// Button width when fully contracted (the spinner circle diameter).
    pub min_width: f32,
    /// Button width at rest.
    pub max_width: f32,
    /// Button height, constant for the whole sequence.
    pub height: f32,
    /// Ring thickness at rest.
    pub min_ring: f32,
    /// Ring thickness while the spinner is visible.
    pub max_ring: f32,
}

impl ButtonMetrics {
    /// Standard button geometry with the given base duration.
    pub fn new(base_duration: Duration) -> Self {
        Self {
            base_duration,
            min_width: 70.0,
            max_width: 300.0,
            height: 70.0,
            min_ring: 3.0,
            max_ring: 6.0,
        }
    }

    /// Malformed metrics are construction bugs, not runtime conditions.
    fn validate(&self) {
        assert!(
            !self.base_duration.is_zero(),
            "base animation duration must be non-zero"
        );
        assert!(
            self.min_width > 0.0 && self.min_width <= self.max_width,
            "button width bounds are inverted: {} > {}",
            self.min_width,
            self.max_width
        );
        assert!(self.height > 0.0, "button height must be positive");
        assert!(
            self.min_ring >= 0.0 && self.min_ring <= self.max_ring,
            "ring thickness bounds are inverted: {} > {}",
            self.min_ring,
            self.max_ring
        );
    }
}

/// Mutable render state shared between the sequencer and the renderer.
///
/// Written only by [`Sequencer::tick`]; the renderer reads it every frame
/// and recomputes all geometry from it, so nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonParams {
    /// Opacity of the inner fill, 0-255.
    pub fill_alpha: u8,
    /// Current label color.
    pub text_color: Color,
    /// Current color of the outer shape.
    pub ring_color: Color,
    /// Outer shape width in logical units.
    pub button_width: f32,
    /// Outer shape height in logical units.
    pub button_height: f32,
    /// Inset of the inner fill from the outer edge; the spinner arc is only
    /// visible while this sits at its maximum.
    pub ring_thickness: f32,
    /// Progress arc extent in degrees, 0-360.
    pub sweep_angle: f32,
    /// Opacity of the confirmation glyph, 0-255.
    pub glyph_alpha: u8,
    /// Current label size in logical units.
    pub text_size: f32,
}

impl ButtonParams {
    /// The at-rest pose: full-size rounded rectangle, brand color, opaque
    /// fill, no sweep, no glyph.
    pub fn idle(metrics: &ButtonMetrics) -> Self {
        Self {
            fill_alpha: 255,
            text_color: theme::BRAND,
            ring_color: theme::BRAND,
            button_width: metrics.max_width,
            button_height: metrics.height,
            ring_thickness: metrics.min_ring,
            sweep_angle: 0.0,
            glyph_alpha: 0,
            text_size: TEXT_SIZE,
        }
    }
}

/// One phase of the tap choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Inner fill fades out so the button appears to fill solid; label
    /// fades to white and bounces.
    FillBefore,
    /// Rounded rectangle contracts into a circle.
    Shrink,
    /// Spinner arc sweeps a full revolution.
    RingFill,
    /// Circle expands back out; check mark fades in.
    ScaleAfter,
    /// Button fills with the success color; label reappears.
    FillAfter,
}

impl Stage {
    /// Stages in playback order, strictly sequential.
    pub const SEQUENCE: [Stage; 5] = [
        Stage::FillBefore,
        Stage::Shrink,
        Stage::RingFill,
        Stage::ScaleAfter,
        Stage::FillAfter,
    ];

    /// Stage length as a multiple of the base duration.
    pub fn duration(self, base: Duration) -> Duration {
        match self {
            Self::FillBefore => base / 2,
            Self::Shrink => base,
            Self::RingFill => base * 2,
            Self::ScaleAfter => base,
            Self::FillAfter => base,
        }
    }

    /// Delay between the previous stage ending and this one starting.
    pub fn start_delay(self, base: Duration) -> Duration {
        match self {
            Self::FillAfter => base * 2,
            _ => Duration::ZERO,
        }
    }

    /// Easing curve for this stage's progress fraction.
    pub fn easing(self) -> Easing {
        match self {
            Self::FillBefore | Self::FillAfter => Easing::Linear,
            Self::Shrink => Easing::AccelerateDecelerate,
            Self::RingFill | Self::ScaleAfter => Easing::Decelerate,
        }
    }

    /// One-shot effect applied when the stage starts.
    fn begin(self, params: &mut ButtonParams) {
        if self == Self::ScaleAfter {
            // The label stays hidden until the success fill brings it back.
            params.text_color = Color {
                a: 0.0,
                ..Color::WHITE
            };
        }
    }

    /// Write this stage's interpolated values at the given eased fraction.
    fn apply(self, eased: f32, metrics: &ButtonMetrics, params: &mut ButtonParams) {
        match self {
            Self::FillBefore => {
                params.fill_alpha = 255 - alpha_of(eased);
                params.text_color = lerp_color(theme::BRAND, Color::WHITE, eased);
                params.text_size = bounce(eased);
            }
            Self::Shrink => {
                params.fill_alpha = alpha_of(eased);
                params.text_color = Color {
                    a: f32::from(255 - params.fill_alpha) / 255.0,
                    ..Color::WHITE
                };
                params.button_width = lerp(metrics.max_width, metrics.min_width, eased);
                params.ring_thickness = lerp(metrics.min_ring, metrics.max_ring, eased);
                params.ring_color = lerp_color(theme::BRAND, theme::RING_BACKGROUND, eased);
            }
            Self::RingFill => {
                params.sweep_angle = eased * 360.0;
            }
            Self::ScaleAfter => {
                params.button_width = lerp(metrics.min_width, metrics.max_width, eased);
                params.ring_thickness = lerp(metrics.max_ring, metrics.min_ring, eased);
                params.fill_alpha = 255 - alpha_of(eased);
                params.glyph_alpha = 255 - params.fill_alpha;
            }
            Self::FillAfter => {
                params.fill_alpha = alpha_of(eased);
                params.glyph_alpha = 255 - params.fill_alpha;
                params.text_color = Color {
                    a: f32::from(params.fill_alpha) / 255.0,
                    ..theme::BRAND
                };
            }
        }
    }

    /// Land the stage on its end values and run its completion effect.
    fn finish(self, metrics: &ButtonMetrics, params: &mut ButtonParams) {
        self.apply(1.0, metrics, params);
        if self == Self::RingFill {
            params.ring_color = theme::BRAND;
        }
    }
}

/// Drives the stage chain and owns the shared parameter state.
#[derive(Debug, Clone)]
pub struct Sequencer {
    metrics: ButtonMetrics,
    params: ButtonParams,
    started_at: Option<Instant>,
}

impl Sequencer {
    /// Create an idle sequencer.
    ///
    /// Panics if the metrics are malformed; that is a construction bug.
    pub fn new(metrics: ButtonMetrics) -> Self {
        metrics.validate();
        Self {
            metrics,
            params: ButtonParams::idle(&metrics),
            started_at: None,
        }
    }

    /// Current parameter state, as of the last tick.
    pub fn params(&self) -> &ButtonParams {
        &self.params
    }

    /// Button geometry configuration.
    pub fn metrics(&self) -> &ButtonMetrics {
        &self.metrics
    }

    /// Whether a sequence is in flight. While true, taps are ignored and
    /// the app keeps the frame subscription alive.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Wall-clock length of the full chain: 7.5 x the base duration.
    pub fn total_duration(&self) -> Duration {
        let base = self.metrics.base_duration;
        Stage::SEQUENCE
            .iter()
            .map(|stage| stage.start_delay(base) + stage.duration(base))
            .sum()
    }

    /// Start the sequence on a tap.
    ///
    /// Returns `false` (and leaves all state untouched) if a sequence is
    /// already running; re-entrant taps are a silent no-op, not an error.
    pub fn activate(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            tracing::debug!("submit tap ignored, animation already running");
            return false;
        }
        tracing::info!("submit animation started");
        self.started_at = Some(now);
        true
    }

    /// Advance the animation to `now`.
    ///
    /// Recomputes the parameter state from scratch against the fixed
    /// timeline, so skipped or duplicated frames cannot accumulate error.
    /// Clears the running flag once the final stage completes.
    pub fn tick(&mut self, now: Instant) {
        let Some(started) = self.started_at else {
            return;
        };
        let elapsed = now.saturating_duration_since(started);
        self.params = self.seek(elapsed);
        if elapsed >= self.total_duration() {
            tracing::info!("submit animation finished");
            self.started_at = None;
        }
    }

    /// Replay the timeline from the idle pose up to `elapsed`.
    fn seek(&self, elapsed: Duration) -> ButtonParams {
        let base = self.metrics.base_duration;
        let mut params = ButtonParams::idle(&self.metrics);
        let mut offset = Duration::ZERO;

        for stage in Stage::SEQUENCE {
            let start = offset + stage.start_delay(base);
            let end = start + stage.duration(base);
            if elapsed >= end {
                stage.begin(&mut params);
                stage.finish(&self.metrics, &mut params);
            } else if elapsed >= start {
                stage.begin(&mut params);
                let fraction = (elapsed - start).as_secs_f32() / stage.duration(base).as_secs_f32();
                stage.apply(stage.easing().apply(fraction), &self.metrics, &mut params);
                return params;
            } else {
                // Inside a start delay: hold the previous stage's end pose.
                return params;
            }
            offset = end;
        }

        // Past the end of the chain. The final stage's targets already match
        // the idle pose except for the sweep, still sitting at a full
        // revolution; reset it so the pose is exactly idle again.
        params.sweep_angle = 0.0;
        params
    }
}

/// Scale a fraction to the 0-255 alpha range.
fn alpha_of(eased: f32) -> u8 {
    (eased.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

/// Per-channel linear blend, including alpha.
fn lerp_color(from: Color, to: Color, fraction: f32) -> Color {
    Color {
        r: lerp(from.r, to.r, fraction),
        g: lerp(from.g, to.g, fraction),
        b: lerp(from.b, to.b, fraction),
        a: lerp(from.a, to.a, fraction),
    }
}

/// Stage-1 label bounce: dips to the pressed size and returns.
fn bounce(fraction: f32) -> f32 {
    if fraction <= 0.5 {
        lerp(TEXT_SIZE, TEXT_SIZE_DIPPED, fraction * 2.0)
    } else {
        lerp(TEXT_SIZE_DIPPED, TEXT_SIZE, (fraction - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ButtonMetrics {
        ButtonMetrics::new(Duration::from_millis(500))
    }

    fn ticked(sequencer: &mut Sequencer, start: Instant, at_ms: u64) -> ButtonParams {
        sequencer.tick(start + Duration::from_millis(at_ms));
        *sequencer.params()
    }

    #[test]
    fn idle_pose_is_the_rest_state() {
        let sequencer = Sequencer::new(metrics());
        let p = sequencer.params();
        assert_eq!(p.fill_alpha, 255);
        assert_eq!(p.glyph_alpha, 0);
        assert_eq!(p.sweep_angle, 0.0);
        assert_eq!(p.button_width, 300.0);
        assert_eq!(p.button_height, 70.0);
        assert_eq!(p.ring_thickness, 3.0);
        assert_eq!(p.text_color, theme::BRAND);
        assert_eq!(p.ring_color, theme::BRAND);
        assert_eq!(p.text_size, 22.0);
        assert!(!sequencer.is_running());
    }

    #[test]
    fn total_duration_is_seven_and_a_half_base_units() {
        let sequencer = Sequencer::new(metrics());
        assert_eq!(sequencer.total_duration(), Duration::from_millis(3750));
    }

    #[test]
    fn tap_while_running_is_a_no_op() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        assert!(sequencer.activate(start));

        let before = ticked(&mut sequencer, start, 2000);
        assert!(!sequencer.activate(start + Duration::from_millis(2000)));
        let after = ticked(&mut sequencer, start, 2000);
        assert_eq!(before, after, "re-tap must leave parameters untouched");
        assert!(sequencer.is_running());
    }

    #[test]
    fn running_flag_goes_false_true_false_over_one_sequence() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();

        assert!(!sequencer.is_running());
        sequencer.activate(start);
        assert!(sequencer.is_running());

        ticked(&mut sequencer, start, 3749);
        assert!(sequencer.is_running());
        ticked(&mut sequencer, start, 3750);
        assert!(!sequencer.is_running());

        // Idle again: a new tap is accepted.
        assert!(sequencer.activate(start + Duration::from_millis(4000)));
    }

    #[test]
    fn fill_before_fades_fill_and_whitens_label() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        // Linear midpoint of the 250ms stage.
        let p = ticked(&mut sequencer, start, 125);
        assert_eq!(p.fill_alpha, 255 - 128);
        assert_eq!(p.text_size, 18.0, "bounce dips at the stage midpoint");

        let p = ticked(&mut sequencer, start, 250);
        assert_eq!(p.fill_alpha, 0);
        assert_eq!(p.text_color, Color::WHITE);
        assert_eq!(p.text_size, 22.0);
        // Geometry untouched by stage 1.
        assert_eq!(p.button_width, 300.0);
    }

    #[test]
    fn shrink_midpoint_follows_interpolation_formulas() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        // 500ms is the raw midpoint of [250, 750); the s-curve passes
        // through 0.5 there, so the linear formulas apply exactly.
        let p = ticked(&mut sequencer, start, 500);
        let f = Easing::AccelerateDecelerate.apply(0.5);
        assert!((f - 0.5).abs() < 1e-6);
        assert!((p.button_width - (300.0 - f * 230.0)).abs() < 1e-3);
        assert!((p.ring_thickness - (3.0 + f * 3.0)).abs() < 1e-3);
        // The eased midpoint can round to either side of 127.5.
        assert!(p.fill_alpha == 127 || p.fill_alpha == 128);
        // Label is the grayscale complement of the fill.
        assert_eq!(p.text_color.a, f32::from(255 - p.fill_alpha) / 255.0);
    }

    #[test]
    fn shrink_is_monotonic() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        let mut last_width = f32::MAX;
        let mut last_ring = f32::MIN;
        for ms in (250..=750).step_by(25) {
            let p = ticked(&mut sequencer, start, ms);
            assert!(p.button_width <= last_width);
            assert!(p.ring_thickness >= last_ring);
            assert!((70.0..=300.0).contains(&p.button_width));
            assert!((3.0..=6.0).contains(&p.ring_thickness));
            last_width = p.button_width;
            last_ring = p.ring_thickness;
        }
        let p = ticked(&mut sequencer, start, 750);
        assert_eq!(p.button_width, 70.0);
        assert_eq!(p.ring_thickness, 6.0);
        assert_eq!(p.fill_alpha, 255);
        assert!((p.ring_color.r - theme::RING_BACKGROUND.r).abs() < 1e-6);
        assert!((p.ring_color.g - theme::RING_BACKGROUND.g).abs() < 1e-6);
        assert!((p.ring_color.b - theme::RING_BACKGROUND.b).abs() < 1e-6);
    }

    #[test]
    fn ring_fill_sweeps_a_full_revolution() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        assert_eq!(ticked(&mut sequencer, start, 750).sweep_angle, 0.0);

        let mut last_sweep = 0.0f32;
        for ms in (750..=1750).step_by(50) {
            let p = ticked(&mut sequencer, start, ms);
            assert!(
                p.sweep_angle >= last_sweep,
                "sweep must be non-decreasing within the stage"
            );
            assert!((0.0..=360.0).contains(&p.sweep_angle));
            last_sweep = p.sweep_angle;
        }

        // t=1500ms: raw fraction 0.75, decelerate-eased to 0.9375.
        let p = ticked(&mut sequencer, start, 1500);
        assert!((p.sweep_angle - 337.5).abs() < 1e-3);

        let p = ticked(&mut sequencer, start, 1750);
        assert_eq!(p.sweep_angle, 360.0);
        assert_eq!(p.ring_color, theme::BRAND, "ring resets on completion");
    }

    #[test]
    fn spinner_thickness_gate_holds_through_ring_fill() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        for ms in (750..1750).step_by(100) {
            let p = ticked(&mut sequencer, start, ms);
            assert_eq!(p.ring_thickness, 6.0);
        }
    }

    #[test]
    fn scale_after_expands_and_fades_in_glyph() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        // Raw fraction 0.5 of [1750, 2250), decelerate-eased to 0.75.
        let p = ticked(&mut sequencer, start, 2000);
        assert!((p.button_width - (70.0 + 0.75 * 230.0)).abs() < 1e-3);
        assert!((p.ring_thickness - (6.0 - 0.75 * 3.0)).abs() < 1e-3);
        assert_eq!(p.fill_alpha, 255 - 191);
        assert_eq!(p.glyph_alpha, 191);
        assert_eq!(p.text_color.a, 0.0, "label is forced transparent");

        let p = ticked(&mut sequencer, start, 2250);
        assert_eq!(p.button_width, 300.0);
        assert_eq!(p.ring_thickness, 3.0);
        assert_eq!(p.fill_alpha, 0);
        assert_eq!(p.glyph_alpha, 255);
    }

    #[test]
    fn fill_after_delay_holds_the_expanded_pose() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        let end_of_scale = ticked(&mut sequencer, start, 2250);
        for ms in [2500, 3000, 3249] {
            let held = ticked(&mut sequencer, start, ms);
            assert_eq!(held, end_of_scale, "params must hold during the delay");
        }
    }

    #[test]
    fn fill_after_restores_label_in_success_color() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        let p = ticked(&mut sequencer, start, 3500);
        assert_eq!(p.fill_alpha, 128);
        assert_eq!(p.glyph_alpha, 127);
        assert_eq!(
            (p.text_color.r, p.text_color.g, p.text_color.b),
            (theme::BRAND.r, theme::BRAND.g, theme::BRAND.b)
        );
        assert!((p.text_color.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn sequence_end_restores_the_idle_pose() {
        let mut sequencer = Sequencer::new(metrics());
        let start = Instant::now();
        sequencer.activate(start);

        ticked(&mut sequencer, start, 4000);
        assert!(!sequencer.is_running());
        assert_eq!(*sequencer.params(), ButtonParams::idle(sequencer.metrics()));
    }

    #[test]
    fn skipped_frames_do_not_change_the_outcome() {
        let mut dense = Sequencer::new(metrics());
        let mut sparse = Sequencer::new(metrics());
        let start = Instant::now();
        dense.activate(start);
        sparse.activate(start);

        for ms in (0..=2000).step_by(10) {
            dense.tick(start + Duration::from_millis(ms));
        }
        sparse.tick(start + Duration::from_millis(2000));

        assert_eq!(dense.params(), sparse.params());
    }

    #[test]
    #[should_panic(expected = "base animation duration")]
    fn zero_duration_fails_fast() {
        let mut bad = metrics();
        bad.base_duration = Duration::ZERO;
        let _ = Sequencer::new(bad);
    }

    #[test]
    #[should_panic(expected = "width bounds")]
    fn inverted_width_bounds_fail_fast() {
        let mut bad = metrics();
        bad.min_width = 400.0;
        let _ = Sequencer::new(bad);
    }

    #[test]
    fn alpha_helpers_are_exact_at_endpoints() {
        assert_eq!(alpha_of(0.0), 0);
        assert_eq!(alpha_of(1.0), 255);
        assert_eq!(alpha_of(0.5), 128);
    }

    #[test]
    fn color_lerp_endpoints() {
        let mid = lerp_color(Color::BLACK, Color::WHITE, 0.5);
        assert_eq!(lerp_color(theme::BRAND, Color::WHITE, 0.0), theme::BRAND);
        let end = lerp_color(theme::BRAND, Color::WHITE, 1.0);
        assert!((end.r - 1.0).abs() < 1e-6);
        assert!((end.g - 1.0).abs() < 1e-6);
        assert!((end.b - 1.0).abs() < 1e-6);
        assert_eq!((mid.r, mid.g, mid.b), (0.5, 0.5, 0.5));
    }
}
