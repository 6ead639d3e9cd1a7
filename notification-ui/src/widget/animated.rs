use std::time::Duration;

use iced_core::event::{self, Event};
use iced_core::layout::{self, Layout};
use iced_core::mouse;
use iced_core::overlay;
use iced_core::renderer;
use iced_core::widget::tree::{self, Tree};
use iced_core::widget::Operation;
use iced_core::window;
use iced_core::{Clipboard, Element, Length, Rectangle, Shell, Size, Vector, Widget};

use super::transition::{Transition, DEFAULT_DURATION};

/// Shows or hides its content with a vertical expand/shrink transition.
///
/// The visibility is a plain prop: the transition starts on the first frame
/// that observes a changed value and runs for `duration`. While collapsed the
/// content takes no space and receives no event.
#[allow(missing_debug_implementations)]
pub struct AnimatedVisibility<'a, Message, Theme = crate::theme::Theme, Renderer = iced::Renderer>
{
    visible: bool,
    duration: Duration,
    content: Element<'a, Message, Theme, Renderer>,
}

impl<'a, Message, Theme, Renderer> AnimatedVisibility<'a, Message, Theme, Renderer> {
    pub fn new(visible: bool, content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            visible,
            duration: DEFAULT_DURATION,
            content: content.into(),
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

struct State {
    transition: Transition,
    progress: f32,
}

impl State {
    fn new(visible: bool) -> Self {
        Self {
            transition: Transition::new(visible),
            progress: if visible { 1.0 } else { 0.0 },
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for AnimatedVisibility<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.visible))
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.content.as_widget().size().width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let progress = tree.state.downcast_ref::<State>().progress;
        let content = self
            .content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits);
        let size = content.size();

        // The content slides down from above while the clip grows.
        let offset = -(1.0 - progress) * size.height;
        layout::Node::with_children(
            Size::new(size.width, size.height * progress),
            vec![content.translate(Vector::new(0.0, offset))],
        )
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        if let Event::Window(window::Event::RedrawRequested(now)) = &event {
            if state
                .transition
                .set_visible(self.visible, *now, self.duration)
            {
                log::debug!(
                    "{} transition started",
                    if self.visible { "expand" } else { "shrink" }
                );
            }
            let was_animating = state.transition.is_animating();
            let progress = state.transition.tick(*now, self.duration);
            if was_animating && !state.transition.is_animating() {
                log::trace!("transition finished at progress {}", progress);
            }
            if progress != state.progress {
                state.progress = progress;
                shell.invalidate_layout();
            }
            if state.transition.is_animating() {
                shell.request_redraw(window::RedrawRequest::NextFrame);
            }
        }

        if state.progress <= 0.0 {
            return event::Status::Ignored;
        }

        match layout.children().next() {
            Some(content_layout) => self.content.as_widget_mut().on_event(
                &mut tree.children[0],
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            ),
            None => event::Status::Ignored,
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if tree.state.downcast_ref::<State>().progress <= 0.0 {
            return;
        }
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };
        renderer.with_layer(clip, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                &clip,
            );
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if tree.state.downcast_ref::<State>().progress <= 0.0 {
            return mouse::Interaction::None;
        }
        layout
            .children()
            .next()
            .map(|content_layout| {
                self.content.as_widget().mouse_interaction(
                    &tree.children[0],
                    content_layout,
                    cursor,
                    viewport,
                    renderer,
                )
            })
            .unwrap_or_default()
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        if tree.state.downcast_ref::<State>().progress < 1.0 {
            return None;
        }
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<AnimatedVisibility<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(animated: AnimatedVisibility<'a, Message, Theme, Renderer>) -> Self {
        Element::new(animated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::clipboard;
    use iced_core::time::Instant;
    use iced_core::Point;

    const HEIGHT: f32 = 24.0;
    const D: Duration = Duration::from_millis(300);

    /// Fixed height block publishing a message for every mouse event.
    struct Block;

    impl<Theme> Widget<(), Theme, ()> for Block {
        fn size(&self) -> Size<Length> {
            Size {
                width: Length::Fill,
                height: Length::Fixed(HEIGHT),
            }
        }

        fn layout(
            &self,
            _tree: &mut Tree,
            _renderer: &(),
            limits: &layout::Limits,
        ) -> layout::Node {
            layout::atomic(limits, Length::Fill, HEIGHT)
        }

        fn on_event(
            &mut self,
            _tree: &mut Tree,
            event: Event,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _renderer: &(),
            _clipboard: &mut dyn Clipboard,
            shell: &mut Shell<'_, ()>,
            _viewport: &Rectangle,
        ) -> event::Status {
            if let Event::Mouse(_) = event {
                shell.publish(());
                return event::Status::Captured;
            }
            event::Status::Ignored
        }

        fn draw(
            &self,
            _tree: &Tree,
            _renderer: &mut (),
            _theme: &Theme,
            _style: &renderer::Style,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _viewport: &Rectangle,
        ) {
        }

        fn mouse_interaction(
            &self,
            _tree: &Tree,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _viewport: &Rectangle,
            _renderer: &(),
        ) -> mouse::Interaction {
            mouse::Interaction::Pointer
        }
    }

    #[derive(Debug)]
    struct Outcome {
        messages: usize,
        layout_invalid: bool,
        redraw_requested: bool,
    }

    struct Mounted {
        widget: AnimatedVisibility<'static, (), (), ()>,
        tree: Tree,
    }

    fn limits() -> layout::Limits {
        layout::Limits::new(Size::ZERO, Size::new(200.0, 200.0))
    }

    fn viewport() -> Rectangle {
        Rectangle::with_size(Size::new(200.0, 200.0))
    }

    fn cursor() -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(10.0, 10.0))
    }

    impl Mounted {
        fn new(visible: bool) -> Self {
            let widget = AnimatedVisibility::new(visible, Element::new(Block)).duration(D);
            let tree = Tree::new(&widget as &dyn Widget<(), (), ()>);
            Self { widget, tree }
        }

        fn height(&mut self) -> f32 {
            self.widget
                .layout(&mut self.tree, &(), &limits())
                .size()
                .height
        }

        fn send(&mut self, event: Event) -> Outcome {
            let node = self.widget.layout(&mut self.tree, &(), &limits());
            let mut messages = Vec::new();
            let mut shell = Shell::new(&mut messages);
            let _ = self.widget.on_event(
                &mut self.tree,
                event,
                Layout::new(&node),
                cursor(),
                &(),
                &mut clipboard::Null,
                &mut shell,
                &viewport(),
            );
            let layout_invalid = shell.is_layout_invalid();
            let redraw_requested = shell.redraw_request().is_some();
            Outcome {
                messages: messages.len(),
                layout_invalid,
                redraw_requested,
            }
        }

        fn redraw(&mut self, now: Instant) -> Outcome {
            self.send(Event::Window(window::Event::RedrawRequested(now)))
        }

        fn click(&mut self) -> Outcome {
            self.send(Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)))
        }

        fn mouse_interaction(&mut self) -> mouse::Interaction {
            let node = self.widget.layout(&mut self.tree, &(), &limits());
            self.widget
                .mouse_interaction(&self.tree, Layout::new(&node), cursor(), &viewport(), &())
        }
    }

    fn assert_height(mounted: &mut Mounted, expected: f32) {
        let height = mounted.height();
        assert!(
            (height - expected).abs() < 0.1,
            "height {} instead of {}",
            height,
            expected
        );
    }

    #[test]
    fn test_hidden_takes_no_space() {
        let mut m = Mounted::new(false);
        assert_height(&mut m, 0.0);
        let outcome = m.redraw(Instant::now());
        assert!(!outcome.layout_invalid);
        assert!(!outcome.redraw_requested);
        assert_height(&mut m, 0.0);
    }

    #[test]
    fn test_created_visible_is_not_animated() {
        let mut m = Mounted::new(true);
        assert_height(&mut m, HEIGHT);
        let outcome = m.redraw(Instant::now());
        assert!(!outcome.layout_invalid);
        assert!(!outcome.redraw_requested);
        assert_height(&mut m, HEIGHT);
    }

    #[test]
    fn test_expand_starts_on_redraw_after_prop_change() {
        let mut m = Mounted::new(false);
        m.widget.visible = true;
        // nothing moves until a frame observes the new value
        assert_height(&mut m, 0.0);

        let t0 = Instant::now();
        let outcome = m.redraw(t0);
        assert!(!outcome.layout_invalid);
        assert!(outcome.redraw_requested);
        assert_height(&mut m, 0.0);

        let outcome = m.redraw(t0 + Duration::from_millis(150));
        assert!(outcome.layout_invalid);
        assert!(outcome.redraw_requested);
        assert_height(&mut m, HEIGHT / 2.0);

        let outcome = m.redraw(t0 + Duration::from_millis(400));
        assert!(outcome.layout_invalid);
        assert!(!outcome.redraw_requested);
        assert_height(&mut m, HEIGHT);
    }

    #[test]
    fn test_shrink_collapses_to_zero() {
        let mut m = Mounted::new(true);
        m.widget.visible = false;
        let t0 = Instant::now();
        m.redraw(t0);
        assert_height(&mut m, HEIGHT);

        m.redraw(t0 + Duration::from_millis(75));
        assert_height(&mut m, HEIGHT * 0.75);

        let outcome = m.redraw(t0 + D);
        assert!(outcome.layout_invalid);
        assert!(!outcome.redraw_requested);
        assert_height(&mut m, 0.0);
    }

    #[test]
    fn test_collapsed_content_gets_no_event() {
        let mut hidden = Mounted::new(false);
        assert_eq!(hidden.click().messages, 0);
        assert_eq!(hidden.mouse_interaction(), mouse::Interaction::None);

        let mut shown = Mounted::new(true);
        assert_eq!(shown.click().messages, 1);
        assert_eq!(shown.mouse_interaction(), mouse::Interaction::Pointer);
    }
}
