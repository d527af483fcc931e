// SPDX-License-Identifier: MPL-2.0
//! Outline picture icon for the empty gallery.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Framed landscape glyph (mountains and a sun) drawn with strokes.
#[derive(Debug, Clone, Copy)]
pub struct PhotoGlyph {
    color: Color,
    size: f32,
}

impl PhotoGlyph {
    #[must_use]
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for PhotoGlyph {
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
        // Drawn on a 24-unit grid, scaled to the widget.
        let unit = frame.width().min(frame.height()) / 24.0;
        let at = |x: f32, y: f32| Point::new(x * unit, y * unit);
        let stroke = Stroke::default()
            .with_width(2.0 * unit)
            .with_color(self.color)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round);

        frame.stroke(
            &Path::rounded_rectangle(
                at(4.0, 4.0),
                Size::new(16.0 * unit, 16.0 * unit),
                (2.0 * unit).into(),
            ),
            stroke,
        );
        let landscape = Path::new(|builder| {
            builder.move_to(at(4.0, 16.0));
            builder.line_to(at(9.0, 11.0));
            builder.line_to(at(16.0, 18.0));
            builder.move_to(at(13.0, 15.0));
            builder.line_to(at(15.0, 13.0));
            builder.line_to(at(20.0, 17.0));
        });
        frame.stroke(&landscape, stroke);
        frame.fill(&Path::circle(at(15.0, 8.5), 1.2 * unit), self.color);

        vec![frame.into_geometry()]
    }
}
