use core::slice;

use num_traits::ToPrimitive;
use tinyvec::TinyVec;

use super::error::EditorError;
use super::point::Point;
use super::segment::segment_count;
use super::{NativeFloat, Point2};

/// Points kept inline before the store spills onto the heap
const INLINE_POINTS: usize = 16;

/// Ordered, append/truncate-only sequence of points.
///
/// Insertion order is drawing order and indices are dense and 0-based.
/// Points are never modified in place; they are appended to or removed from the tail.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore<P = Point2<NativeFloat>>
where
    P: Point,
{
    points: TinyVec<[P; INLINE_POINTS]>,
}

impl<P> PointStore<P>
where
    P: Point,
{
    pub fn new() -> Self {
        PointStore {
            points: TinyVec::new(),
        }
    }

    /// Add `point` to the tail. Any coordinates are accepted.
    pub fn append(&mut self, point: P) {
        self.points.push(point);
    }

    /// Like `append`, but rejects points with NaN or infinite coordinates.
    pub fn try_append(&mut self, point: P) -> Result<(), EditorError> {
        if !point.is_finite() {
            return Err(EditorError::NonFinitePoint {
                x: point.axis(0).to_f64().unwrap_or(NativeFloat::NAN),
                y: point.axis(1).to_f64().unwrap_or(NativeFloat::NAN),
            });
        }
        self.append(point);
        Ok(())
    }

    /// Remove the tail point. Does nothing on an empty store.
    pub fn remove_last(&mut self) -> Option<P> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Read-only view of the points in drawing order
    pub fn snapshot(&self) -> &[P] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cubic segments the current points produce
    pub fn segment_count(&self) -> usize {
        segment_count(self.points.len())
    }
}

impl<P: Point> Extend<P> for PointStore<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            self.append(point);
        }
    }
}

impl<P: Point> FromIterator<P> for PointStore<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut store = PointStore::new();
        store.extend(iter);
        store
    }
}

impl<'a, P: Point> IntoIterator for &'a PointStore<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
