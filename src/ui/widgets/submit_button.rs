//! Animated submit button widget
//!
//! Composes a procedurally painted button face (canvas) with a separately
//! owned text label stacked above it, wrapped in a `mouse_area` tap target.
//! The face is a pure function of the sequencer's current [`ButtonParams`]:
//! outer rounded rectangle, rotating progress wedge, inner fill and the
//! confirmation check mark, in that paint order. All geometry is recomputed
//! from the parameters on every frame.

use iced::widget::canvas::{Canvas, Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke};
use iced::widget::{container, mouse_area, text};
use iced::{Alignment, Color, Element, Fill, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

use crate::app::Message;
use crate::ui::animation::{ButtonMetrics, ButtonParams};
use crate::ui::theme;

/// Breathing room around the largest button pose.
const CANVAS_PADDING: f32 = 10.0;

/// Check mark bounding box side, centered on the button.
const GLYPH_SIZE: f32 = 34.0;

/// Build the submit button element for the current animation state.
pub fn view<'a>(
    params: &'a ButtonParams,
    metrics: &'a ButtonMetrics,
    label: &'a str,
) -> Element<'a, Message> {
    let face = Canvas::new(ButtonFace { params, metrics })
        .width(metrics.max_width + 2.0 * CANVAS_PADDING)
        .height(metrics.height + 2.0 * CANVAS_PADDING);

    let label = container(
        text(label)
            .size(params.text_size)
            .color(params.text_color)
            .font(theme::LABEL_FONT),
    )
    .width(Fill)
    .height(Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center);

    mouse_area(iced::widget::stack![face, label])
        .on_press(Message::SubmitPressed)
        .into()
}

/// Painter for the button background, spinner and glyph.
struct ButtonFace<'a> {
    params: &'a ButtonParams,
    metrics: &'a ButtonMetrics,
}

impl<Message> Program<Message> for ButtonFace<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let p = self.params;

        // Pill rule: the corner radius tracks the current height, so the
        // fully contracted pose is an exact circle.
        let corner_radius = p.button_height / 2.0;

        // Outer rounded rectangle.
        let outer_size = Size::new(p.button_width, p.button_height);
        frame.fill(
            &Path::rounded_rectangle(
                centered_top_left(center, outer_size),
                outer_size,
                corner_radius.into(),
            ),
            p.ring_color,
        );

        // Rotating wedge, gated on the ring being at full thickness. The
        // gate is binary on purpose: the arc must never show while the
        // button is still morphing.
        let alpha = spinner_alpha(p.ring_thickness, self.metrics.max_ring, p.sweep_angle);
        if alpha > 0.0 {
            let start_angle = 270.0f32.to_radians();
            let end_angle = start_angle + p.sweep_angle.to_radians();
            let wedge = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(iced::widget::canvas::path::Arc {
                    center,
                    radius: p.button_height / 2.0,
                    start_angle: Radians(start_angle),
                    end_angle: Radians(end_angle),
                });
                builder.close();
            });
            frame.fill(&wedge, with_alpha(theme::BRAND, alpha));
        }

        // Inner fill, inset by the ring thickness on every side.
        let inner_size = Size::new(
            p.button_width - 2.0 * p.ring_thickness,
            p.button_height - 2.0 * p.ring_thickness,
        );
        frame.fill(
            &Path::rounded_rectangle(
                centered_top_left(center, inner_size),
                inner_size,
                inner_corner_radius(corner_radius, p.ring_thickness).into(),
            ),
            with_alpha(theme::FILL, f32::from(p.fill_alpha) / 255.0),
        );

        // Confirmation check mark.
        if p.glyph_alpha > 0 {
            frame.stroke(
                &check_mark(center, GLYPH_SIZE),
                Stroke {
                    line_cap: LineCap::Round,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                        .with_width(5.0)
                        .with_color(with_alpha(Color::WHITE, f32::from(p.glyph_alpha) / 255.0))
                },
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        mouse::Interaction::Pointer
    }
}

/// Top-left corner of a rectangle of `size` centered on `center`.
fn centered_top_left(center: Point, size: Size) -> Point {
    Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
}

/// Inner corner radius follows the outer one inward, clamped at zero.
fn inner_corner_radius(outer: f32, ring_thickness: f32) -> f32 {
    (outer - ring_thickness).max(0.0)
}

/// Binary visibility gate for the progress wedge.
///
/// Fully opaque only once the ring has reached maximum thickness (the
/// contracted circle pose) and there is something to sweep; never an
/// intermediate opacity.
fn spinner_alpha(ring_thickness: f32, max_ring: f32, sweep_angle: f32) -> f32 {
    if ring_thickness >= max_ring && sweep_angle > 0.0 {
        1.0
    } else {
        0.0
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Two-segment check mark centered in a `size` box around `center`.
fn check_mark(center: Point, size: f32) -> Path {
    Path::new(|builder| {
        builder.move_to(Point::new(center.x - 0.32 * size, center.y + 0.02 * size));
        builder.line_to(Point::new(center.x - 0.08 * size, center.y + 0.26 * size));
        builder.line_to(Point::new(center.x + 0.34 * size, center.y - 0.22 * size));
    })
}
