// SPDX-License-Identifier: MPL-2.0
//! Printing-press drum drawn on a canvas.
//!
//! Four colour wedges turn inside an ink ring while the edition loads.

use crate::ui::design_tokens::{border, sizing};
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians per second.
pub const ROTATION_SPEED: f32 = PI;

const WEDGE_SEGMENTS: usize = 12;

/// Advances a rotation angle by `delta_secs`, wrapped to `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32, delta_secs: f32) -> f32 {
    (rotation + ROTATION_SPEED * delta_secs).rem_euclid(TAU)
}

/// Spinning press drum.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            size: sizing::SPINNER,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

fn wedge(center: Point, radius: f32, start: f32, sweep: f32) -> Path {
    let mut builder = canvas::path::Builder::new();
    builder.move_to(center);
    #[allow(clippy::cast_precision_loss)]
    // WEDGE_SEGMENTS is tiny, no precision concern
    for i in 0..=WEDGE_SEGMENTS {
        let angle = start + sweep * (i as f32 / WEDGE_SEGMENTS as f32);
        builder.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    builder.close();
    builder.build()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let colors = ColorScheme::for_theme(theme);
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - border::WIDTH_LG;

                let washes: [Color; 4] = [
                    colors.wash_red,
                    colors.wash_blue,
                    colors.wash_yellow,
                    colors.wash_purple,
                ];
                let sweep = TAU / washes.len() as f32;
                for (i, wash) in washes.iter().enumerate() {
                    #[allow(clippy::cast_precision_loss)]
                    let start = self.rotation + sweep * i as f32;
                    frame.fill(&wedge(center, radius, start, sweep), *wash);
                }

                let ring = Path::circle(center, radius);
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_width(border::WIDTH_LG)
                        .with_color(colors.ink),
                );

                let hub = Path::circle(center, radius / 4.0);
                frame.fill(&hub, colors.ink);
            });

        vec![geometry]
    }
}
