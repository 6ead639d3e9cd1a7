use std::f32::consts::PI;
use std::time::Duration;

use iced::advanced::graphics::geometry::Renderer as _;
use iced::widget::canvas;
use iced::{Radians, Renderer, Vector};
use iced_core::event::{self, Event};
use iced_core::layout::{self, Layout};
use iced_core::mouse;
use iced_core::renderer;
use iced_core::time::Instant;
use iced_core::widget::tree::{self, Tree};
use iced_core::window;
use iced_core::Renderer as _;
use iced_core::{Clipboard, Element, Length, Rectangle, Shell, Size, Widget};

pub const SIZE: f32 = 24.0;
pub const STROKE_WIDTH: f32 = 1.0;
/// Angle covered by the arc, the rest of the circle stays empty.
const SWEEP: f32 = 1.5 * PI;
const CYCLE: Duration = Duration::from_millis(1000);

/// A small circular loading spinner: a thin arc turning once per cycle.
///
/// The arc takes the inherited text color, so a spinner placed in a styled
/// container matches the container text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner;

impl Spinner {
    pub fn new() -> Self {
        Self
    }
}

/// Fraction of a turn done after `elapsed`, in `[0, 1)`.
fn rotation(elapsed: Duration, cycle: Duration) -> f32 {
    if cycle.is_zero() {
        return 0.0;
    }
    (elapsed.as_secs_f32() / cycle.as_secs_f32()).fract()
}

/// Start and end angles of the arc at `rotation`, starting from the top.
fn arc_angles(rotation: f32) -> (f32, f32) {
    let start = 2.0 * PI * rotation - PI / 2.0;
    (start, start + SWEEP)
}

struct State {
    start: Option<Instant>,
    rotation: f32,
}

impl<Message, Theme> Widget<Message, Theme, Renderer> for Spinner {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            start: None,
            rotation: 0.0,
        })
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fixed(SIZE),
            height: Length::Fixed(SIZE),
        }
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, SIZE, SIZE)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            let start = *state.start.get_or_insert(now);
            state.rotation = rotation(now.saturating_duration_since(start), CYCLE);
            shell.request_redraw(window::RedrawRequest::NextFrame);
        }
        event::Status::Ignored
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let (start_angle, end_angle) = arc_angles(state.rotation);

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let arc = canvas::Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center: frame.center(),
                radius: (bounds.width.min(bounds.height) - STROKE_WIDTH) / 2.0,
                start_angle: Radians(start_angle),
                end_angle: Radians(end_angle),
            })
        });
        frame.stroke(
            &arc,
            canvas::Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(style.text_color),
        );

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
            renderer.draw_geometry(frame.into_geometry());
        });
    }
}

impl<'a, Message, Theme> From<Spinner> for Element<'a, Message, Theme, Renderer> {
    fn from(spinner: Spinner) -> Self {
        Element::new(spinner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_turn_per_cycle() {
        assert_eq!(rotation(Duration::ZERO, CYCLE), 0.0);
        assert!((rotation(CYCLE / 4, CYCLE) - 0.25).abs() < 1e-4);
        assert_eq!(rotation(CYCLE, CYCLE), 0.0);
        assert!((rotation(CYCLE * 3 + CYCLE / 2, CYCLE) - 0.5).abs() < 1e-4);
        assert_eq!(rotation(CYCLE, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_arc_starts_at_the_top() {
        let (start, end) = arc_angles(0.0);
        assert_eq!(start, -PI / 2.0);
        assert!((end - start - SWEEP).abs() < 1e-6);
        let (half, _) = arc_angles(0.5);
        assert!((half - PI / 2.0).abs() < 1e-6);
    }
}
