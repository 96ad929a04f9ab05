//! The drawing surface seam.
//!
//! The renderer only ever talks to a [`Surface`]. Surface creation, sizing and
//! pixel-density scaling are left to whoever owns the backend.

use core::convert::Infallible;

use super::cubic_bezier::CubicBezier;
use super::line::LineSegment;
use super::point::Point;
use super::style::Color;

/// Primitive draw calls a rendering backend has to provide.
pub trait Surface<P: Point> {
    type Error;

    /// Erase everything drawn so far
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Stroke a cubic curve from its start to its end anchor
    fn stroke_bezier(
        &mut self,
        curve: &CubicBezier<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        line: &LineSegment<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: P, radius: f32, color: Color) -> Result<(), Self::Error>;
}

/// A draw call as issued by the renderer
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCall<P> {
    Clear,
    Bezier {
        curve: CubicBezier<P>,
        width: f32,
        color: Color,
    },
    Line {
        line: LineSegment<P>,
        width: f32,
        color: Color,
    },
    Circle {
        center: P,
        radius: f32,
        color: Color,
    },
}

/// Surface that records every call instead of drawing it.
///
/// `clear` discards the recording, so after a render the surface holds exactly
/// the calls of that render, starting with a single [`DrawCall::Clear`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface<P> {
    calls: Vec<DrawCall<P>>,
}

impl<P> RecordingSurface<P>
where
    P: Point,
{
    pub fn new() -> Self {
        RecordingSurface { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[DrawCall<P>] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall<P>> {
        self.calls
    }

    pub fn beziers(&self) -> impl Iterator<Item = &CubicBezier<P>> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Bezier { curve, .. } => Some(curve),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment<P>> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { line, .. } => Some(line),
            _ => None,
        })
    }

    /// Filled circles as (center, color)
    pub fn circles(&self) -> impl Iterator<Item = (P, Color)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Circle { center, color, .. } => Some((*center, *color)),
            _ => None,
        })
    }
}

impl<P> Surface<P> for RecordingSurface<P>
where
    P: Point,
{
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn stroke_bezier(
        &mut self,
        curve: &CubicBezier<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Bezier {
            curve: *curve,
            width,
            color,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        line: &LineSegment<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Line {
            line: *line,
            width,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: P, radius: f32, color: Color) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;

    #[test]
    fn clear_restarts_recording() {
        let mut surface = RecordingSurface::new();
        let p = Point2::new(1.0f64, 2.0);
        surface.fill_circle(p, 5.0, Color::RED).unwrap();
        surface.clear().unwrap();
        surface.fill_circle(p, 5.0, Color::BLUE).unwrap();

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Clear,
                DrawCall::Circle {
                    center: p,
                    radius: 5.0,
                    color: Color::BLUE
                }
            ]
        );
        assert_eq!(surface.circles().collect::<Vec<_>>(), vec![(p, Color::BLUE)]);
    }
}
