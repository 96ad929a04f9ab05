//! Plotters backend.
//!
//! Enable this adapter with the `plotters` feature to render the editor onto any
//! `plotters` drawing area, e.g. a `BitMapBackend` or an `SVGBackend`.
//!
//! # Example
//! ```rust,no_run
//! use plotters::prelude::*;
//! use bezier_sketch::adapters::plotters::PlottersSurface;
//! use bezier_sketch::{render, Point2, PointStore};
//!
//! let mut store = PointStore::new();
//! store.append(Point2::new(10.0, 10.0));
//!
//! let root = SVGBackend::new("frame.svg", (800, 500)).into_drawing_area();
//! let mut surface = PlottersSurface::new(&root, 64);
//! render(&store, &mut surface).unwrap();
//! root.present().unwrap();
//! ```
//!
//! Plotters cannot stroke a cubic curve, so curves are flattened into
//! `curve_steps` straight lines first.

use ::plotters::coord::Shift;
use ::plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use ::plotters::element::{Circle, PathElement};
use ::plotters::prelude::DrawingBackend;
use ::plotters::style::{Color as _, RGBColor};
use num_traits::ToPrimitive;

use crate::cubic_bezier::CubicBezier;
use crate::line::LineSegment;
use crate::point::Point;
use crate::style::Color;
use crate::surface::Surface;

pub struct PlottersSurface<'a, DB>
where
    DB: DrawingBackend,
{
    area: &'a DrawingArea<DB, Shift>,
    curve_steps: usize,
}

impl<'a, DB> PlottersSurface<'a, DB>
where
    DB: DrawingBackend,
{
    pub fn new(area: &'a DrawingArea<DB, Shift>, curve_steps: usize) -> Self {
        PlottersSurface { area, curve_steps }
    }

    pub fn curve_steps(&self) -> usize {
        self.curve_steps
    }
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Surface pixel a point falls on. Non-finite components end up at 0.
fn backend_coord<P: Point>(p: P) -> (i32, i32) {
    let pixel = |axis: usize| p.axis(axis).to_f64().map_or(0, |v| v.round() as i32);
    (pixel(0), pixel(1))
}

fn pixel_width(width: f32) -> u32 {
    width.round().max(1.0) as u32
}

impl<'a, DB, P> Surface<P> for PlottersSurface<'a, DB>
where
    DB: DrawingBackend,
    P: Point,
{
    type Error = DrawingAreaErrorKind<DB::ErrorType>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.area.fill(&rgb(Color::WHITE))
    }

    fn stroke_bezier(
        &mut self,
        curve: &CubicBezier<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error> {
        let polyline: Vec<_> = curve.flatten(self.curve_steps).map(backend_coord).collect();
        self.area
            .draw(&PathElement::new(polyline, rgb(color).stroke_width(pixel_width(width))))
    }

    fn stroke_line(
        &mut self,
        line: &LineSegment<P>,
        width: f32,
        color: Color,
    ) -> Result<(), Self::Error> {
        let points = vec![backend_coord(line.start()), backend_coord(line.end())];
        self.area
            .draw(&PathElement::new(points, rgb(color).stroke_width(pixel_width(width))))
    }

    fn fill_circle(&mut self, center: P, radius: f32, color: Color) -> Result<(), Self::Error> {
        self.area.draw(&Circle::new(
            backend_coord(center),
            radius.round() as i32,
            rgb(color).filled(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Point2, PointStore};
    use ::plotters::prelude::*;

    #[test]
    fn backend_coord_rounds() {
        assert_eq!(backend_coord(Point2::new(1.4f64, 2.6)), (1, 3));
        assert_eq!(backend_coord(Point2::new(f64::NAN, -3.5)), (0, -4));
    }

    #[test]
    fn renders_to_svg() {
        let store: PointStore = [(10.0, 10.0), (20.0, 80.0), (80.0, 80.0), (90.0, 10.0)]
            .into_iter()
            .map(Point2::from)
            .collect();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (100, 100)).into_drawing_area();
            let mut surface = PlottersSurface::new(&root, 8);
            render(&store, &mut surface).unwrap();
            root.present().unwrap();
        }

        // one marker per point; the curve and its two guides are polylines
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<polyline").count(), 3);

        let svg = svg.to_lowercase();
        assert!(svg.contains("#ff0000"), "anchor fill missing");
        assert!(svg.contains("#0000ff"), "handle fill missing");
        assert!(svg.contains("#cccccc"), "guide stroke missing");
    }
}
