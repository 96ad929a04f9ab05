//! Full redraw of a point snapshot onto a [`Surface`].

use log::{debug, trace};

use super::point::Point;
use super::point_store::PointStore;
use super::segment::{markers, segments};
use super::style::RenderStyle;
use super::surface::Surface;

/// Draws the segments of a point sequence with their guide lines, then a
/// marker for every point.
///
/// Rendering keeps no state between calls: the output is a function of the
/// points and the style alone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CurveRenderer {
    style: RenderStyle,
}

impl CurveRenderer {
    pub fn new(style: RenderStyle) -> Self {
        CurveRenderer { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Clear `surface` and redraw everything in `points`.
    pub fn render<P, S>(&self, points: &[P], surface: &mut S) -> Result<(), S::Error>
    where
        P: Point,
        S: Surface<P>,
    {
        let style = &self.style;
        surface.clear()?;

        let mut drawn = 0;
        for segment in segments(points) {
            trace!("segment at index {}", segment.start_index());
            surface.stroke_bezier(segment.curve(), style.curve_width, style.curve_color)?;
            for guide in segment.guides().iter() {
                surface.stroke_line(guide, style.guide_width, style.guide_color)?;
            }
            drawn += 1;
        }

        for marker in markers(points) {
            surface.fill_circle(
                marker.center,
                style.marker_radius,
                style.marker_color(marker.role),
            )?;
        }

        debug!("rendered {} points, {} segments", points.len(), drawn);
        Ok(())
    }

    pub fn render_store<P, S>(&self, store: &PointStore<P>, surface: &mut S) -> Result<(), S::Error>
    where
        P: Point,
        S: Surface<P>,
    {
        self.render(store.snapshot(), surface)
    }
}

/// Redraw `store` onto `surface` with the default style.
pub fn render<P, S>(store: &PointStore<P>, surface: &mut S) -> Result<(), S::Error>
where
    P: Point,
    S: Surface<P>,
{
    CurveRenderer::default().render_store(store, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DrawCall, MarkerRole, Point2, RecordingSurface};

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn record(points: &[Point2<f64>]) -> RecordingSurface<Point2<f64>> {
        let mut surface = RecordingSurface::new();
        CurveRenderer::default().render(points, &mut surface).unwrap();
        surface
    }

    #[test]
    fn empty_snapshot_only_clears() {
        assert_eq!(record(&[]).calls(), &[DrawCall::Clear]);
    }

    #[test]
    fn short_snapshots_draw_markers_only() {
        for n in 1..=3 {
            let points: Vec<_> = (0..n).map(|i| p(i as f64, 0.0)).collect();
            let surface = record(&points);
            assert_eq!(surface.beziers().count(), 0);
            assert_eq!(surface.lines().count(), 0);
            assert_eq!(surface.circles().count(), n);
        }
    }

    #[test]
    fn draw_order_per_segment() {
        let points = [p(10.0, 10.0), p(20.0, 80.0), p(80.0, 80.0), p(90.0, 10.0)];
        let calls = record(&points).into_calls();

        // clear, curve, two guides, four markers
        assert_eq!(calls.len(), 8);
        assert_eq!(calls[0], DrawCall::Clear);
        assert!(matches!(calls[1], DrawCall::Bezier { width, color, .. } if width == 2.0 && color == Color::BLACK));
        assert!(matches!(calls[2], DrawCall::Line { color, .. } if color == Color::LIGHT_GRAY));
        assert!(matches!(calls[3], DrawCall::Line { color, .. } if color == Color::LIGHT_GRAY));
        for call in &calls[4..] {
            assert!(matches!(call, DrawCall::Circle { radius, .. } if *radius == 5.0));
        }
    }

    #[test]
    fn tail_points_stay_unconnected() {
        let points: Vec<_> = (0..9).map(|i| p(i as f64, i as f64)).collect();
        let surface = record(&points);
        assert_eq!(surface.beziers().count(), 2);
        assert_eq!(surface.lines().count(), 4);
        // points 7 and 8 don't complete a group
        assert!(surface.lines().all(|line| line.end() != points[7] && line.end() != points[8]));
        assert_eq!(surface.circles().count(), 9);
    }

    #[test]
    fn custom_style_is_used() {
        let style = RenderStyle {
            anchor_color: Color::rgb(1, 2, 3),
            marker_radius: 3.0,
            ..RenderStyle::default()
        };
        let mut surface = RecordingSurface::new();
        CurveRenderer::new(style).render(&[p(0.0, 0.0), p(1.0, 1.0)], &mut surface).unwrap();

        let colors: Vec<_> = surface.circles().map(|(_, color)| color).collect();
        assert_eq!(colors, vec![Color::rgb(1, 2, 3), style.marker_color(MarkerRole::Handle)]);
    }
}
