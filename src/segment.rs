//! Segmentation of a flat point sequence into cubic curve segments.
//!
//! Points are consumed at stride 3: the segment starting at index `i` uses the
//! points `i, i+1, i+2, i+3` as (start anchor, control 1, control 2, end anchor),
//! so consecutive segments share their anchor. A segment exists only while
//! `i + 3 < len`; trailing points that don't complete a group stay unconnected.

use core::iter::FusedIterator;

use super::cubic_bezier::CubicBezier;
use super::line::LineSegment;
use super::point::Point;

/// Number of points between two consecutive segment starts
pub const SEGMENT_STRIDE: usize = 3;

/// Number of segments a sequence of `len` points produces
pub const fn segment_count(len: usize) -> usize {
    len.saturating_sub(1) / SEGMENT_STRIDE
}

/// One renderable segment: the cubic curve and its two guide lines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveSegment<P> {
    start_index: usize,
    curve: CubicBezier<P>,
}

impl<P> CurveSegment<P>
where
    P: Point,
{
    /// Index of the start anchor in the point sequence
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn curve(&self) -> &CubicBezier<P> {
        &self.curve
    }

    /// The two disjoint guide lines: start anchor to control 1 and
    /// control 2 to end anchor.
    pub fn guides(&self) -> [LineSegment<P>; 2] {
        [
            LineSegment::new(self.curve.start, self.curve.ctrl1),
            LineSegment::new(self.curve.ctrl2, self.curve.end),
        ]
    }
}

/// Lazy iterator over the segments of a point slice, see [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a, P> {
    points: &'a [P],
    next: usize,
}

/// Iterate the segments of `points` at start indices 0, 3, 6, ...
pub fn segments<P: Point>(points: &[P]) -> Segments<'_, P> {
    Segments { points, next: 0 }
}

impl<'a, P> Iterator for Segments<'a, P>
where
    P: Point,
{
    type Item = CurveSegment<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next;
        let group = self.points.get(i..i + 4)?;
        self.next += SEGMENT_STRIDE;

        Some(CurveSegment {
            start_index: i,
            curve: CubicBezier::new(group[0], group[1], group[2], group[3]),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.next);
        let count = segment_count(remaining);
        (count, Some(count))
    }
}

impl<'a, P: Point> ExactSizeIterator for Segments<'a, P> {}

impl<'a, P: Point> FusedIterator for Segments<'a, P> {}

/// Display classification of a point by its index
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Start or end of a segment, every index divisible by 3
    Anchor,
    /// Control point shaping the curvature between two anchors
    Handle,
}

impl MarkerRole {
    pub const fn of(index: usize) -> MarkerRole {
        if index % SEGMENT_STRIDE == 0 {
            MarkerRole::Anchor
        } else {
            MarkerRole::Handle
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker<P> {
    pub index: usize,
    pub center: P,
    pub role: MarkerRole,
}

/// Every point of the sequence paired with its role, in drawing order
pub fn markers<P: Point>(points: &[P]) -> impl ExactSizeIterator<Item = Marker<P>> + '_ {
    points.iter().enumerate().map(|(index, &center)| Marker {
        index,
        center,
        role: MarkerRole::of(index),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2;
    use proptest::prelude::*;

    fn points(n: usize) -> Vec<Point2<f64>> {
        (0..n).map(|i| Point2::new(i as f64, (i * i) as f64)).collect()
    }

    #[test]
    fn segment_count_table() {
        let expected = [(0, 0), (1, 0), (2, 0), (3, 0), (4, 1), (5, 1), (6, 1), (7, 2), (10, 3)];
        for (n, count) in expected {
            assert_eq!(segment_count(n), count, "n = {}", n);
            assert_eq!(segments(&points(n)).count(), count, "n = {}", n);
        }
    }

    #[test]
    fn segments_share_anchors() {
        let pts = points(7);
        let segs: Vec<_> = segments(&pts).collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].start_index(), 0);
        assert_eq!(segs[1].start_index(), 3);
        assert_eq!(segs[0].curve().end(), segs[1].curve().start());
        assert_eq!(segs[1].curve().control_points(), [pts[3], pts[4], pts[5], pts[6]]);
    }

    #[test]
    fn guides_are_disjoint() {
        let pts = points(4);
        let seg = segments(&pts).next().unwrap();
        let [first, second] = seg.guides();
        assert_eq!((first.start(), first.end()), (pts[0], pts[1]));
        assert_eq!((second.start(), second.end()), (pts[2], pts[3]));
    }

    #[test]
    fn segments_is_fused() {
        let pts = points(5);
        let mut iter = segments(&pts);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn marker_roles() {
        let roles: Vec<_> = markers(&points(7)).map(|m| m.role).collect();
        use MarkerRole::*;
        assert_eq!(roles, vec![Anchor, Handle, Handle, Anchor, Handle, Handle, Anchor]);
    }

    proptest! {
        #[test]
        fn segment_count_matches_loop(n in 0usize..200) {
            let mut expected = 0;
            let mut i = 0;
            while i + 3 < n {
                expected += 1;
                i += 3;
            }
            let pts = points(n);
            let iter = segments(&pts);
            prop_assert_eq!(iter.len(), expected);
            prop_assert_eq!(iter.count(), expected);
        }

        #[test]
        fn roles_follow_index(n in 0usize..100) {
            for marker in markers(&points(n)) {
                let anchor = marker.index % 3 == 0;
                prop_assert_eq!(marker.role == MarkerRole::Anchor, anchor);
            }
        }
    }
}
