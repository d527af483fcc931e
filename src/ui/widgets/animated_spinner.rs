// SPDX-License-Identifier: MPL-2.0
//! Animated loading ring drawn on a canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians advanced per animation tick.
pub const ROTATION_STEP: f32 = 0.2;

const RING_WIDTH: f32 = 4.0;
/// The arc covers three quarters of the ring; the remaining gap rotates.
const ARC_SWEEP: f32 = PI * 1.5;
const SEGMENTS: u16 = 45;

/// Returns the rotation one tick after `rotation`, wrapped to `[0, 2π)`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// Rotating ring shown while images load.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle (radians).
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XXL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - RING_WIDTH;

                // Start just after the gap at the top, then sweep clockwise.
                let start_angle = self.rotation - PI / 4.0;
                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                for i in 1..=SEGMENTS {
                    let t = f32::from(i) / f32::from(SEGMENTS);
                    let angle = start_angle + ARC_SWEEP * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(RING_WIDTH).with_color(Color {
                        a: 0.15,
                        ..self.color
                    }),
                );
                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around_full_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }
}
