//! Circular dial input widget.
//!
//! A gesture-driven control: dragging around the dial face maps the pointer
//! angle to a value within the configured range. Every emitted value is
//! already clamped and snapped to one decimal by the core mapper, so owners
//! never observe an out-of-range reading, no matter how fast or far the
//! pointer moves. The numeric readout is overlaid by the owning screen.

use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{Element, Point, Rectangle, Renderer, Theme, Vector};

use vitalog_core::{Range, pointer_to_value, round1, value_to_angle};

/// Thickness of the dial's border ring.
const BORDER_WIDTH: f32 = 10.0;

/// Build a dial input element.
///
/// `value` is the committed reading the indicator reflects; `on_change` is
/// invoked with a new reading on every drag update and once more, snapped, on
/// release.
pub fn dial_input<'a, Message: 'a>(
    radius: f32,
    range: Range,
    value: f32,
    on_change: impl Fn(f32) -> Message + 'static,
) -> Element<'a, Message> {
    let size = radius * 2.0;

    Canvas::new(DialInput {
        radius,
        range,
        value,
        on_change: Box::new(on_change),
    })
    .width(size)
    .height(size)
    .into()
}

struct DialInput<Message> {
    radius: f32,
    range: Range,
    value: f32,
    on_change: Box<dyn Fn(f32) -> Message>,
}

impl<Message> DialInput<Message> {
    /// Map a local pointer position to a value and emit it.
    fn emit(&self, position: Point) -> canvas::Action<Message> {
        let value = pointer_to_value(position.x, position.y, self.radius, self.range);
        canvas::Action::publish((self.on_change)(value))
    }
}

/// Gesture state: the dial is either idle or tracking a drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    dragging: bool,
}

impl<Message> canvas::Program<Message> for DialInput<Message> {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let origin = Vector::new(bounds.x, bounds.y);

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.dragging = true;
                Some(self.emit(position).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                // Keep tracking fast drags that leave the widget bounds.
                let position = cursor.position()? - origin;
                Some(self.emit(position).and_capture())
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.dragging =>
            {
                state.dragging = false;
                // Snap the committed value to one decimal and re-emit.
                let snapped = round1(self.value);
                Some(canvas::Action::publish((self.on_change)(snapped)).and_capture())
            }
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                state.dragging = true;
                Some(self.emit(*position - origin).and_capture())
            }
            canvas::Event::Touch(touch::Event::FingerMoved { position, .. })
                if state.dragging =>
            {
                Some(self.emit(*position - origin).and_capture())
            }
            canvas::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) if state.dragging => {
                state.dragging = false;
                let snapped = round1(self.value);
                Some(canvas::Action::publish((self.on_change)(snapped)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        let center = Point::new(self.radius, self.radius);

        // Dial face with a solid border ring.
        frame.fill(&Path::circle(center, self.radius), palette.background.strong.color);
        frame.fill(
            &Path::circle(center, self.radius - BORDER_WIDTH),
            palette.background.weak.color,
        );

        // Hub behind the readout overlaid by the owning screen.
        frame.fill(
            &Path::circle(center, self.radius * 0.7),
            palette.background.base.color,
        );

        // Indicator dimple, always positioned from the committed value.
        let dimple_radius = self.radius / 10.0;
        let orbit = self.radius - dimple_radius;
        let angle = value_to_angle(self.value, self.range).to_radians();
        let indicator = Point::new(
            center.x + orbit * angle.cos(),
            center.y + orbit * angle.sin(),
        );
        frame.fill(&Path::circle(indicator, dimple_radius), palette.primary.strong.color);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
